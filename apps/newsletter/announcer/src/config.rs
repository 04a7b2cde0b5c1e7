//! Configuration for the announcer

use std::env;
use tracing::warn;

/// Message broadcast when nothing else is configured.
pub const DEFAULT_MESSAGE: &str = "lorem ipsum ad dolorem";

/// Application environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env_or_default("APP_ENV", "development");

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    /// Broadcast message used when `--message` is not given
    pub message: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// A blank `NEWSLETTER_MESSAGE` falls back to [`DEFAULT_MESSAGE`].
    pub fn from_env() -> Self {
        let mut message = env_or_default("NEWSLETTER_MESSAGE", DEFAULT_MESSAGE);
        if message.trim().is_empty() {
            warn!("NEWSLETTER_MESSAGE is blank, using the default message");
            message = DEFAULT_MESSAGE.to_string();
        }

        Config {
            environment: Environment::from_env(),
            message,
        }
    }
}

/// Helper to load environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
