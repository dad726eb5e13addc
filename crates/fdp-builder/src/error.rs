use fdp_format::FormatError;
use fdp_graph::GraphError;
use fdp_registry::RegistryError;
use fdp_types::{RecordKind, TypeError};
use thiserror::Error;

/// Errors produced by the hierarchy builder.
///
/// Every variant is a synchronous precondition failure of a single build
/// call. None is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A record (or one of its fields) does not have the expected shape.
    #[error("invalid {} metadata: {reason}", .kind.label())]
    InvalidInput { kind: RecordKind, reason: String },

    /// A required key is absent.
    #[error("missing key '{field}' in {} metadata", .kind.label())]
    MissingField { field: String, kind: RecordKind },

    /// The identifier collides with an existing registry entry.
    #[error("{} ID {id:?} must be unique: already registered as {existing}", .kind.label())]
    DuplicateIdentifier {
        id: String,
        kind: RecordKind,
        existing: RecordKind,
    },

    /// A child record whose identifier its parent never declared.
    #[error("{} ID {id:?} was not declared by its parent metadata", .kind.label())]
    UnknownIdentifier { id: String, kind: RecordKind },

    /// A record that was already filled in is supplied again.
    #[error("{} {id:?} has already been built", .kind.label())]
    AlreadyBuilt { id: String, kind: RecordKind },

    /// A parent record has to be filled in before its children.
    #[error("{} {id:?} must be built before its children", .kind.label())]
    NotBuilt { id: String, kind: RecordKind },

    /// The identifier cannot be used as a resource address segment.
    #[error("invalid identifier {id:?}: {reason}")]
    InvalidIdentifier { id: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("type error: {0}")]
    Type(#[from] TypeError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("registry error: {0}")]
    Registry(String),
}

impl From<RegistryError> for BuildError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::AlreadyRegistered {
                id,
                existing,
                attempted,
            } => BuildError::DuplicateIdentifier {
                id,
                kind: attempted,
                existing,
            },
            RegistryError::InvalidIdentifier { id, reason } => {
                BuildError::InvalidIdentifier { id, reason }
            }
            other => BuildError::Registry(other.to_string()),
        }
    }
}

pub type BuildResult<T> = Result<T, BuildError>;
