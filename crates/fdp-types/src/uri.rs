//! Resource address derivation.
//!
//! Every record in the graph is addressed relative to one configured base
//! URI:
//!
//! | resource | address |
//! |---|---|
//! | document | `{base}/doc` |
//! | publishing point | `{base}/fdp` |
//! | catalog `id` | `{base}/catalog/{id}` |
//! | dataset `id` | `{base}/dataset/{id}` |
//! | distribution `id` | `{base}/distribution/{id}` |

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::kind::RecordKind;

/// Maps (record kind, identifier) pairs to resource addresses under a base URI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UriScheme {
    base: String,
}

impl UriScheme {
    /// Create a scheme rooted at `base`.
    ///
    /// Trailing slashes are trimmed so that `http://x/` and `http://x` yield
    /// the same addresses. The base must carry a URI scheme and must not
    /// contain whitespace.
    pub fn new(base: impl Into<String>) -> Result<Self, TypeError> {
        let raw = base.into();
        let trimmed = raw.trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(TypeError::InvalidBaseUri {
                uri: raw,
                reason: "base URI must not be empty".into(),
            });
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(TypeError::InvalidBaseUri {
                uri: raw,
                reason: "base URI must not contain whitespace".into(),
            });
        }
        let has_scheme = trimmed
            .split_once(':')
            .map(|(scheme, _)| {
                !scheme.is_empty()
                    && scheme
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            })
            .unwrap_or(false);
        if !has_scheme {
            return Err(TypeError::InvalidBaseUri {
                uri: raw,
                reason: "base URI must start with a scheme (e.g. 'http:')".into(),
            });
        }

        Ok(Self {
            base: trimmed.to_string(),
        })
    }

    /// The configured base, unchanged apart from trailing-slash trimming.
    pub fn base_address(&self) -> &str {
        &self.base
    }

    /// Address of the document describing the publishing point.
    pub fn document_address(&self) -> String {
        format!("{}/doc", self.base)
    }

    /// Fixed address of the publishing point.
    pub fn publishing_point_address(&self) -> String {
        format!("{}/fdp", self.base)
    }

    /// Address of the record `id` of the given kind.
    ///
    /// The publishing point ignores `id` and resolves to its fixed address.
    pub fn address_for(&self, kind: RecordKind, id: &str) -> String {
        match kind.path_segment() {
            Some(segment) => format!("{}/{}/{}", self.base, segment, id),
            None => self.publishing_point_address(),
        }
    }

    /// Inverse of [`address_for`](Self::address_for) for catalog, dataset and
    /// distribution addresses.
    pub fn parse_address<'a>(&self, address: &'a str) -> Option<(RecordKind, &'a str)> {
        let rest = address.strip_prefix(self.base.as_str())?.strip_prefix('/')?;
        if rest == "fdp" {
            return Some((RecordKind::PublishingPoint, ""));
        }
        let (segment, id) = rest.split_once('/')?;
        let kind = RecordKind::ALL
            .into_iter()
            .find(|k| k.path_segment() == Some(segment))?;
        if id.is_empty() {
            return None;
        }
        Some((kind, id))
    }
}
