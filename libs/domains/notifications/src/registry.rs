//! Registry of mail backends keyed by provider id.

use crate::error::{NotificationError, NotificationResult};
use crate::models::ProviderId;
use crate::providers::Mailer;
use std::collections::HashMap;
use tracing::debug;

/// Registry of all mail backends.
///
/// The default backend is required up front, so resolution can always fall
/// back to it. `resolve` hands out borrows, which keeps the registry frozen
/// for as long as any subscriber is bound to one of its backends.
pub struct ProviderRegistry {
    providers: HashMap<ProviderId, Box<dyn Mailer>>,
    default: Box<dyn Mailer>,
}

impl ProviderRegistry {
    pub fn new(default: Box<dyn Mailer>) -> Self {
        Self {
            providers: HashMap::new(),
            default,
        }
    }

    /// Store `mailer` under `id`, replacing any previous entry.
    ///
    /// Registering under `ProviderId::Default` swaps the fallback backend.
    pub fn register(&mut self, id: ProviderId, mailer: Box<dyn Mailer>) -> NotificationResult<()> {
        if !id.is_registrable() {
            return Err(NotificationError::ReservedProvider(id));
        }

        debug!(provider = %id, backend = mailer.name(), "Registering mail backend");

        if id == ProviderId::Default {
            self.default = mailer;
        } else {
            self.providers.insert(id, mailer);
        }
        Ok(())
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with_provider(mut self, id: ProviderId, mailer: Box<dyn Mailer>) -> NotificationResult<Self> {
        self.register(id, mailer)?;
        Ok(self)
    }

    /// Get the backend for `id`, or the default backend if `id` has no entry.
    pub fn resolve(&self, id: ProviderId) -> &dyn Mailer {
        match self.providers.get(&id) {
            Some(mailer) => mailer.as_ref(),
            None => {
                if id != ProviderId::Default {
                    debug!(provider = %id, "No backend registered, falling back to default");
                }
                self.default.as_ref()
            }
        }
    }

    /// Get the fallback backend.
    pub fn default_mailer(&self) -> &dyn Mailer {
        self.default.as_ref()
    }

    /// Whether `id` resolves to its own entry.
    pub fn contains(&self, id: ProviderId) -> bool {
        id == ProviderId::Default || self.providers.contains_key(&id)
    }

    /// Number of entries, the default included.
    pub fn len(&self) -> usize {
        self.providers.len() + 1
    }

    /// A registry always holds its default, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut providers: Vec<(String, &'static str)> = self
            .providers
            .iter()
            .map(|(id, m)| (id.to_string(), m.name()))
            .collect();
        providers.sort();

        f.debug_struct("ProviderRegistry")
            .field("providers", &providers)
            .field("default", &self.default.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{DefaultBackend, InternalBackend, MockMailer, MonkeyBackend};
    use strum::IntoEnumIterator;

    fn same(a: &dyn Mailer, b: &dyn Mailer) -> bool {
        std::ptr::addr_eq(a, b)
    }

    fn stock_registry() -> ProviderRegistry {
        ProviderRegistry::new(Box::new(DefaultBackend::new("host-3654", "pw", 512)))
            .with_provider(ProviderId::Monkey, Box::new(MonkeyBackend::new("ak", "as")))
            .unwrap()
            .with_provider(ProviderId::Internal, Box::new(InternalBackend::new("host-4528", 443)))
            .unwrap()
    }

    #[test]
    fn test_unknown_resolves_to_default_instance() {
        let registry = stock_registry();

        let unknown = registry.resolve(ProviderId::Unknown);
        let default = registry.resolve(ProviderId::Default);

        assert!(same(unknown, default));
        assert!(same(default, registry.default_mailer()));
        assert_eq!(unknown.name(), "Default");
    }

    #[test]
    fn test_registered_providers_are_distinct() {
        let registry = stock_registry();

        let monkey = registry.resolve(ProviderId::Monkey);
        let internal = registry.resolve(ProviderId::Internal);
        let default = registry.resolve(ProviderId::Default);

        assert!(!same(monkey, internal));
        assert!(!same(monkey, default));
        assert!(!same(internal, default));
        assert_eq!(monkey.name(), "Monkey");
        assert_eq!(internal.name(), "Internal");
    }

    #[test]
    fn test_resolve_is_stable() {
        let registry = stock_registry();

        for id in ProviderId::iter() {
            assert!(same(registry.resolve(id), registry.resolve(id)));
        }
    }

    #[test]
    fn test_missing_entry_falls_back_to_default() {
        let registry = ProviderRegistry::new(Box::new(DefaultBackend::new("h", "p", 1)));

        for id in ProviderId::iter() {
            assert!(same(registry.resolve(id), registry.default_mailer()));
        }
        assert!(!registry.contains(ProviderId::Monkey));
        assert!(registry.contains(ProviderId::Default));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_unknown_is_rejected() {
        let mut registry = stock_registry();

        let result = registry.register(ProviderId::Unknown, Box::new(MockMailer::new()));

        assert_eq!(
            result.unwrap_err(),
            NotificationError::ReservedProvider(ProviderId::Unknown)
        );
        assert!(!registry.contains(ProviderId::Unknown));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_register_default_replaces_fallback() {
        let mut replacement = MockMailer::new();
        replacement.expect_name().return_const("Replacement");

        let registry = stock_registry()
            .with_provider(ProviderId::Default, Box::new(replacement))
            .unwrap();

        assert_eq!(registry.resolve(ProviderId::Unknown).name(), "Replacement");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_debug_lists_entries() {
        let rendered = format!("{:?}", stock_registry());

        assert!(rendered.contains("internal"));
        assert!(rendered.contains("monkey"));
        assert!(rendered.contains("default: \"Default\""));
    }
}
