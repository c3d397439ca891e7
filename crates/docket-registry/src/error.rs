//! Error types for registry operations.

use thiserror::Error;

/// Errors that can occur during registry operations.
///
/// Every failure is reported synchronously to the caller. The registry never
/// retries and never swallows an error; whether to retry is the caller's
/// decision.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry has not been initialized yet.
    #[error("registry is not initialized")]
    NotReady,

    /// An item with this name is already registered.
    #[error("item already registered: {name}")]
    AlreadyExists { name: String },

    /// The content failed the shape check for its declared kind, or the
    /// kind code itself is not recognized.
    #[error("invalid content format: {reason}")]
    InvalidFormat { reason: String },

    /// No item is registered under this name.
    #[error("item not found: {name}")]
    NotFound { name: String },
}

/// Convenience type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
