/// Errors from graph store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A term was given a string that does not parse as an absolute IRI.
    #[error("invalid IRI <{iri}>: {reason}")]
    InvalidIri { iri: String, reason: String },

    /// A literal could not be built (bad language tag).
    #[error("invalid literal {value:?}: {reason}")]
    InvalidLiteral { value: String, reason: String },

    /// A partition address was empty.
    #[error("partition address must not be empty")]
    EmptyAddress,

    /// The store lock was poisoned by a panicking writer.
    #[error("graph store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result alias for graph store operations.
pub type GraphResult<T> = Result<T, GraphError>;
