//! In-house relay provider.

use super::Mailer;
use tracing::debug;

/// Backend for the internal relay, addressed by host and port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalBackend {
    host: String,
    port: u16,
}

impl InternalBackend {
    /// Create a new backend pointed at the relay's host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Render the line `send` writes for this delivery.
    pub fn describe(&self, to: &str, body: &str) -> String {
        format!(
            "Sending message \"{}\" to {}, through host {} and port {}",
            body, to, self.host, self.port
        )
    }
}

impl Mailer for InternalBackend {
    fn send(&self, to: &str, body: &str) {
        debug!(
            provider = self.name(),
            to = %to,
            host = %self.host,
            port = %self.port,
            "Sending email via internal relay"
        );
        println!("{}", self.describe(to, body));
    }

    fn name(&self) -> &'static str {
        "Internal"
    }
}
