//! Fallback provider.
//!
//! Anything that cannot be matched to a registered provider ends up here.

use super::Mailer;
use tracing::debug;

/// Password-authenticated backend used as the registry default.
#[derive(Clone, PartialEq, Eq)]
pub struct DefaultBackend {
    host: String,
    password: String,
    port: u16,
}

impl DefaultBackend {
    /// Create a new fallback backend.
    pub fn new(host: impl Into<String>, password: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            password: password.into(),
            port,
        }
    }

    /// Render the line `send` writes for this delivery.
    pub fn describe(&self, to: &str, body: &str) -> String {
        format!(
            "Sending message \"{}\" to {}, through host {} password {} and port {}",
            body, to, self.host, self.password, self.port
        )
    }
}

// Keep the password out of log output.
impl std::fmt::Debug for DefaultBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultBackend")
            .field("host", &self.host)
            .field("password", &"***")
            .field("port", &self.port)
            .finish()
    }
}

impl Mailer for DefaultBackend {
    fn send(&self, to: &str, body: &str) {
        debug!(
            provider = self.name(),
            to = %to,
            host = %self.host,
            port = %self.port,
            "Sending email via default transport"
        );
        println!("{}", self.describe(to, body));
    }

    fn name(&self) -> &'static str {
        "Default"
    }
}
