//! Identifier syntax validation.
//!
//! Identifiers become the last path segment of a resource address, so they
//! must be usable verbatim inside an IRI:
//! - Must be non-empty
//! - Must not contain whitespace or control characters
//! - Must not contain `/`, `?`, `#`, or any of `<>"{}|\^` and backtick
//! - Must not be `.` or `..`

use crate::error::{RegistryError, Result};

/// Characters that are forbidden anywhere in an identifier.
const FORBIDDEN_CHARS: &[char] = &['/', '?', '#', '<', '>', '"', '{', '}', '|', '\\', '^', '`'];

/// Validate a record identifier, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use fdp_registry::names::validate_identifier;
///
/// assert!(validate_identifier("cat1").is_ok());
/// assert!(validate_identifier("dataset-2019_v2").is_ok());
/// assert!(validate_identifier("").is_err());
/// assert!(validate_identifier("a/b").is_err());
/// ```
pub fn validate_identifier(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(RegistryError::InvalidIdentifier {
            id: id.to_string(),
            reason: "identifier must not be empty".into(),
        });
    }

    if let Some(ch) = id.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(RegistryError::InvalidIdentifier {
            id: id.to_string(),
            reason: format!("contains whitespace or control character: {ch:?}"),
        });
    }

    for ch in FORBIDDEN_CHARS {
        if id.contains(*ch) {
            return Err(RegistryError::InvalidIdentifier {
                id: id.to_string(),
                reason: format!("contains forbidden character: {ch:?}"),
            });
        }
    }

    if id == "." || id == ".." {
        return Err(RegistryError::InvalidIdentifier {
            id: id.to_string(),
            reason: "identifier must not be a dot segment".into(),
        });
    }

    Ok(())
}
