//! Newsletter Announcer
//!
//! Wires the stock mail backends into a registry, subscribes a fixed audience
//! and broadcasts a single announcement.

pub mod cli;
pub mod config;
pub mod telemetry;

use cli::Cli;
use config::Config;
use domain_notifications::{
    DefaultBackend, InternalBackend, MonkeyBackend, Newsletter, NotificationResult, ProviderId,
    ProviderRegistry, Subscriber,
};
use eyre::Result;
use tracing::{error, info, warn};

/// Printed once the broadcast has been attempted, whatever its outcome.
pub const COMPLETION_BANNER: &str = "Announcements were send successfully!";

/// Build the registry holding one backend per known provider.
pub fn build_registry() -> NotificationResult<ProviderRegistry> {
    ProviderRegistry::new(Box::new(DefaultBackend::new(
        "host-3654",
        "default-Password",
        512,
    )))
    .with_provider(
        ProviderId::Monkey,
        Box::new(MonkeyBackend::new("ak-74894", "as-12345")),
    )?
    .with_provider(
        ProviderId::Internal,
        Box::new(InternalBackend::new("host-4528", 443)),
    )
}

/// The demo audience. Foo has no provider and Boo asks for one that does not
/// exist, so both edge cases show up in every run.
pub fn demo_subscribers(registry: &ProviderRegistry) -> Vec<Subscriber<'_>> {
    vec![
        Subscriber::subscribe("Sandy", "sandy@mail.com", registry, ProviderId::Internal),
        Subscriber::subscribe("Valentina", "valentina@mail.com", registry, ProviderId::Monkey),
        Subscriber::subscribe("Martina", "martina@mail.com", registry, ProviderId::Internal),
        Subscriber::new("Foo", "foo@gmail.com"),
        Subscriber::subscribe("Boo", "boo@gmail.com", registry, ProviderId::Unknown),
    ]
}

/// Pick the message to send: `--message` unless it is blank, else the
/// configured one.
pub fn broadcast_message<'a>(cli: &'a Cli, config: &'a Config) -> &'a str {
    match cli.message.as_deref() {
        Some(message) if !message.trim().is_empty() => message,
        Some(_) => {
            warn!("Ignoring blank --message, using the configured message");
            &config.message
        }
        None => &config.message,
    }
}

/// Run one broadcast.
///
/// A failed announcement is reported, never escalated: the process still
/// prints the completion banner and exits cleanly.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let registry = build_registry()?;
    info!(registry = ?registry, "Mail backends ready");

    let newsletter = if cli.empty {
        Newsletter::default()
    } else {
        Newsletter::new(demo_subscribers(&registry))
    };

    let message = broadcast_message(cli, config);

    match newsletter.announce(message) {
        Ok(summary) => info!(
            sent = summary.sent,
            skipped = summary.skipped.len(),
            "Announcement delivered"
        ),
        Err(err) => {
            error!(error = %err, "Announcement failed");
            println!("{}", err);
        }
    }

    println!("\n\n{}", COMPLETION_BANNER);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{DEFAULT_MESSAGE, Environment};
    use domain_notifications::Mailer;
    use strum::IntoEnumIterator;

    fn same(a: &dyn Mailer, b: &dyn Mailer) -> bool {
        std::ptr::addr_eq(a, b)
    }

    fn test_config() -> Config {
        Config {
            environment: Environment::Development,
            message: DEFAULT_MESSAGE.to_string(),
        }
    }

    #[test]
    fn test_registry_holds_every_registrable_provider() {
        let registry = build_registry().unwrap();

        for id in ProviderId::iter() {
            assert_eq!(registry.contains(id), id.is_registrable());
        }
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_registry_resolution() {
        let registry = build_registry().unwrap();

        let monkey = registry.resolve(ProviderId::Monkey);
        let internal = registry.resolve(ProviderId::Internal);
        let default = registry.resolve(ProviderId::Default);

        assert!(same(registry.resolve(ProviderId::Unknown), default));
        assert!(!same(monkey, internal));
        assert!(!same(monkey, default));
        assert!(!same(internal, default));
        assert_eq!(monkey.name(), "Monkey");
        assert_eq!(internal.name(), "Internal");
        assert_eq!(default.name(), "Default");
    }

    #[test]
    fn test_demo_subscribers_bindings() {
        let registry = build_registry().unwrap();
        let subscribers = demo_subscribers(&registry);

        let names: Vec<&str> = subscribers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Sandy", "Valentina", "Martina", "Foo", "Boo"]);

        let backends: Vec<Option<&str>> = subscribers
            .iter()
            .map(|s| s.mailer.map(|m| m.name()))
            .collect();
        assert_eq!(
            backends,
            [
                Some("Internal"),
                Some("Monkey"),
                Some("Internal"),
                None,
                Some("Default"),
            ]
        );

        let boo = subscribers[4].mailer.unwrap();
        assert!(same(boo, registry.default_mailer()));
    }

    #[test]
    fn test_demo_broadcast_summary() {
        let registry = build_registry().unwrap();
        let newsletter = Newsletter::new(demo_subscribers(&registry));

        let summary = newsletter.announce(DEFAULT_MESSAGE).unwrap();

        assert_eq!(summary.sent, 4);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].name, "Foo");
        assert_eq!(summary.skipped[0].email, "foo@gmail.com");
    }

    #[test]
    fn test_broadcast_message_prefers_cli() {
        let cli = Cli {
            message: Some("spring sale".to_string()),
            empty: false,
        };
        assert_eq!(broadcast_message(&cli, &test_config()), "spring sale");
    }

    #[test]
    fn test_broadcast_message_ignores_blank_cli_value() {
        let config = test_config();
        for message in [None, Some("   ".to_string())] {
            let cli = Cli {
                message,
                empty: false,
            };
            assert_eq!(broadcast_message(&cli, &config), DEFAULT_MESSAGE);
        }
    }

    #[test]
    fn test_run_succeeds_with_subscribers() {
        let cli = Cli {
            message: Some("hello".to_string()),
            empty: false,
        };
        assert!(run(&cli, &test_config()).is_ok());
    }

    #[test]
    fn test_run_succeeds_when_announce_fails() {
        let cli = Cli {
            message: None,
            empty: true,
        };
        assert!(run(&cli, &test_config()).is_ok());
    }
}
