use std::path::Path;

use fdp_format::Format;
use fdp_graph::term;
use fdp_types::UriScheme;
use serde::{Deserialize, Serialize};

use crate::error::{BuildError, BuildResult};

/// Configuration for a [`FairGraph`](crate::FairGraph) builder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Base address every resource address is derived from.
    pub base_uri: String,
    /// Language code for `dct:language` and tagged text fields.
    pub language: String,
    /// Format used when a caller does not name one.
    #[serde(with = "format_token")]
    pub default_format: Format,
    /// When `true`, a build call that fails leaves the registry and the
    /// graph exactly as they were before the call.
    pub atomic_batches: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            base_uri: "http://localhost/fdp".to_string(),
            language: "en".to_string(),
            default_format: Format::Turtle,
            atomic_batches: true,
        }
    }
}

impl BuilderConfig {
    /// Default configuration for `base_uri`.
    pub fn for_base(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> BuildResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| BuildError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> BuildResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| BuildError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> BuildResult<String> {
        toml::to_string_pretty(self).map_err(|e| BuildError::Config(e.to_string()))
    }

    /// Check the base URI and language code.
    pub fn validate(&self) -> BuildResult<()> {
        self.uri_scheme()?;
        let lang = self.language.as_str();
        term::lang_string("", lang)
            .map_err(|e| BuildError::Config(format!("invalid language code {lang:?}: {e}")))?;
        Ok(())
    }

    /// The address scheme for [`base_uri`](Self::base_uri).
    pub fn uri_scheme(&self) -> BuildResult<UriScheme> {
        Ok(UriScheme::new(self.base_uri.as_str())?)
    }
}

/// Serializes a [`Format`] as its MIME type and accepts any format token.
mod format_token {
    use fdp_format::Format;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(format: &Format, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(format.mime_type())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Format, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(de::Error::custom)
    }
}
