//! Structured metadata input.
//!
//! Records arrive as JSON-shaped values. [`MetadataRecord`] is a borrowed
//! view over one JSON object that knows which kind of record it describes,
//! so every shape error can name the record kind it occurred in.

use fdp_types::RecordKind;
use serde_json::{Map, Value};

use crate::error::{BuildError, BuildResult};

/// A JSON object interpreted as metadata of one record kind.
#[derive(Clone, Copy, Debug)]
pub struct MetadataRecord<'a> {
    kind: RecordKind,
    fields: &'a Map<String, Value>,
}

impl<'a> MetadataRecord<'a> {
    /// View `value` as a record of `kind`.
    ///
    /// Fails with `InvalidInput` if `value` is not a JSON object.
    pub fn new(value: &'a Value, kind: RecordKind) -> BuildResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { kind, fields }),
            other => Err(BuildError::InvalidInput {
                kind,
                reason: format!("expected a JSON object, got {}", type_name(other)),
            }),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Raw value of an optional key.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }

    /// Required key, any shape.
    pub fn require(&self, key: &str) -> BuildResult<&'a Value> {
        self.fields.get(key).ok_or_else(|| BuildError::MissingField {
            field: key.to_string(),
            kind: self.kind,
        })
    }

    /// Required string key.
    pub fn require_str(&self, key: &str) -> BuildResult<&'a str> {
        match self.require(key)? {
            Value::String(s) => Ok(s),
            other => Err(self.wrong_shape(key, "a string", other)),
        }
    }

    /// Required array key.
    pub fn require_list(&self, key: &str) -> BuildResult<&'a [Value]> {
        match self.require(key)? {
            Value::Array(items) => Ok(items),
            other => Err(self.wrong_shape(key, "a list", other)),
        }
    }

    /// Required array-of-strings key.
    pub fn require_str_list(&self, key: &str) -> BuildResult<Vec<String>> {
        self.require_list(key)?
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(self.wrong_shape(key, "a list of strings", other)),
            })
            .collect()
    }

    /// The nested records under a required list key, each viewed as `kind`.
    pub fn require_records(&self, key: &str, kind: RecordKind) -> BuildResult<Vec<MetadataRecord<'a>>> {
        self.require_list(key)?
            .iter()
            .map(|item| MetadataRecord::new(item, kind))
            .collect()
    }

    /// `InvalidInput` for `key` holding a value of the wrong shape.
    pub(crate) fn wrong_shape(&self, key: &str, expected: &str, found: &Value) -> BuildError {
        BuildError::InvalidInput {
            kind: self.kind,
            reason: format!("'{key}' must be {expected}, got {}", type_name(found)),
        }
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
