use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown record kind: {0}")]
    UnknownRecordKind(String),

    #[error("invalid base URI {uri:?}: {reason}")]
    InvalidBaseUri { uri: String, reason: String },
}
