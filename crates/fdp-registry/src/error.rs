//! Error types for registry operations.

use fdp_types::RecordKind;
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The identifier is already registered (under any kind).
    #[error("{attempted} ID {id:?} is not unique: already registered as {existing}")]
    AlreadyRegistered {
        id: String,
        existing: RecordKind,
        attempted: RecordKind,
    },

    /// The identifier cannot be used as a URI path segment.
    #[error("invalid identifier {id:?}: {reason}")]
    InvalidIdentifier { id: String, reason: String },

    /// The registry lock was poisoned by a panicking writer.
    #[error("registry lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Convenience type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
