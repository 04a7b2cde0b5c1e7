//! Mail backend implementations.
//!
//! This module contains the `Mailer` trait and the backends a subscriber
//! can be routed through. None of them open a connection: sending renders a
//! description of the delivery and writes it to standard output.

mod default;
mod internal;
mod monkey;

pub use default::DefaultBackend;
pub use internal::InternalBackend;
pub use monkey::MonkeyBackend;

/// Trait for mail backends.
///
/// Implementations are immutable once built and cannot fail to send.
#[cfg_attr(test, mockall::automock)]
pub trait Mailer: Send + Sync {
    /// Deliver `body` to the `to` address.
    fn send(&self, to: &str, body: &str);

    /// Get the backend name for logging.
    fn name(&self) -> &'static str;
}
