use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Output formats supported by the writers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Turtle,
    NTriples,
    JsonLd,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Turtle, Format::NTriples, Format::JsonLd];

    /// Canonical MIME type.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Turtle => "text/turtle",
            Self::NTriples => "application/n-triples",
            Self::JsonLd => "application/ld+json",
        }
    }

    /// Conventional file extension (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
            Self::JsonLd => "jsonld",
        }
    }

    /// Every token [`FromStr`] accepts for this format.
    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            Self::Turtle => &["text/turtle", "application/x-turtle", "turtle", "ttl"],
            Self::NTriples => &["application/n-triples", "text/plain", "ntriples", "nt"],
            Self::JsonLd => &["application/ld+json", "json-ld", "jsonld"],
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Parses MIME types and short names, case-insensitively. Media-type
/// parameters (`; charset=utf-8`) are ignored.
impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        Format::ALL
            .into_iter()
            .find(|f| f.tokens().contains(&token.as_str()))
            .ok_or_else(|| FormatError::InvalidFormat(s.to_string()))
    }
}
