//! Data models for the notifications domain.

use crate::providers::Mailer;
use crate::registry::ProviderRegistry;
use strum::{Display, EnumIter};

// ============================================================================
// Provider Identifiers
// ============================================================================

/// Identifies which mail backend a subscriber should be routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ProviderId {
    /// Third-party API provider authenticated with a key pair.
    Monkey,
    /// In-house relay.
    Internal,
    /// Fallback transport used whenever a selection cannot be resolved.
    Default,
    /// Selection that no backend is registered for. Resolves to `Default`.
    Unknown,
}

impl ProviderId {
    /// Whether a backend may be stored under this id.
    pub fn is_registrable(self) -> bool {
        !matches!(self, ProviderId::Unknown)
    }
}

// ============================================================================
// Subscribers
// ============================================================================

/// A newsletter recipient.
///
/// The mailer is borrowed from a [`ProviderRegistry`]; subscribers never own
/// or mutate backends. `None` means nobody picked a provider for this person.
#[derive(Clone)]
pub struct Subscriber<'r> {
    pub name: String,
    pub email: String,
    pub mailer: Option<&'r dyn Mailer>,
}

impl<'r> Subscriber<'r> {
    /// Create a subscriber with no provider assigned.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            mailer: None,
        }
    }

    /// Create a subscriber bound to an explicit mailer.
    pub fn with_mailer(
        name: impl Into<String>,
        email: impl Into<String>,
        mailer: &'r dyn Mailer,
    ) -> Self {
        Self {
            mailer: Some(mailer),
            ..Self::new(name, email)
        }
    }

    /// Create a subscriber whose mailer is resolved from `registry`.
    pub fn subscribe(
        name: impl Into<String>,
        email: impl Into<String>,
        registry: &'r ProviderRegistry,
        provider: ProviderId,
    ) -> Self {
        Self::with_mailer(name, email, registry.resolve(provider))
    }

    /// Whether a mailer is bound.
    pub fn has_mailer(&self) -> bool {
        self.mailer.is_some()
    }
}

impl std::fmt::Debug for Subscriber<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("mailer", &self.mailer.map(|m| m.name()))
            .finish()
    }
}
