//! API-key backed provider.

use super::Mailer;
use tracing::debug;

/// Backend for the third-party mail API, authenticated with a key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonkeyBackend {
    api_key: String,
    secret_key: String,
}

impl MonkeyBackend {
    /// Create a new backend from an API key and its secret.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Render the line `send` writes for this delivery.
    pub fn describe(&self, to: &str, body: &str) -> String {
        format!(
            "Sending message \"{}\" to {}, using key {} and secret {}",
            body, to, self.api_key, self.secret_key
        )
    }
}

impl Mailer for MonkeyBackend {
    fn send(&self, to: &str, body: &str) {
        debug!(provider = self.name(), to = %to, "Sending email via API key pair");
        println!("{}", self.describe(to, body));
    }

    fn name(&self) -> &'static str {
        "Monkey"
    }
}
