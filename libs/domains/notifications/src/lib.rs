//! Notifications Domain
//!
//! This module provides newsletter broadcasting over pluggable mail backends.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Newsletter    │  ← announce(message)
//! └────────┬────────┘
//!          │ one call per subscriber
//! ┌────────▼────────┐
//! │   Subscriber    │  ← Option<&dyn Mailer>, None is skipped
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ ProviderRegistry│  ← resolve(id), unknown ids fall back to default
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │   Mail Backend  │  ← Monkey, Internal, Default
//! └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_notifications::{
//!     Newsletter, ProviderId, ProviderRegistry, Subscriber,
//!     providers::{DefaultBackend, InternalBackend},
//! };
//!
//! let registry = ProviderRegistry::new(Box::new(DefaultBackend::new("relay", "secret", 25)))
//!     .with_provider(ProviderId::Internal, Box::new(InternalBackend::new("mx.local", 587)))?;
//!
//! let newsletter = Newsletter::new(vec![
//!     Subscriber::subscribe("Sandy", "sandy@mail.com", &registry, ProviderId::Internal),
//!     Subscriber::new("Foo", "foo@gmail.com"),
//! ]);
//!
//! let summary = newsletter.announce("hello")?;
//! assert_eq!(summary.sent, 1);
//! assert_eq!(summary.skipped[0].name, "Foo");
//! # Ok::<(), domain_notifications::NotificationError>(())
//! ```

pub mod error;
pub mod models;
pub mod newsletter;
pub mod providers;
pub mod registry;

// Re-export commonly used types
pub use error::{NotificationError, NotificationResult};
pub use models::{ProviderId, Subscriber};
pub use newsletter::{AnnounceSummary, Newsletter, SkippedSubscriber};
pub use providers::{DefaultBackend, InternalBackend, Mailer, MonkeyBackend};
pub use registry::ProviderRegistry;
