//! Error types for the notifications domain.

use crate::models::ProviderId;
use thiserror::Error;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Errors that can occur in the notifications domain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotificationError {
    /// A broadcast was requested for a newsletter with nobody on it.
    #[error("no subscribers registered")]
    NoSubscribers,

    /// The provider id is a lookup probe and cannot own a backend.
    #[error("Provider {0} cannot be registered")]
    ReservedProvider(ProviderId),
}
