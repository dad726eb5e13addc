use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The requested output format is not supported.
    #[error("unsupported output format: {0:?}")]
    InvalidFormat(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for FormatError {
    fn from(err: std::io::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type FormatResult<T> = Result<T, FormatError>;
