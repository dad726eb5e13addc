//! Optional metadata fields per record kind.
//!
//! Each record kind has a table of [`FieldRule`]s mapping an input key to one
//! or more predicates and a value transform. The builder walks the table for
//! the record being filled and emits one statement per (predicate, term).
//! Keys absent from the record, or present with a `null` value, are skipped.

use chrono::NaiveDate;
use fdp_graph::{term, NamedNode, Statement, Term};
use fdp_types::vocab::{self, dcat, dct, rdfs};
use fdp_types::RecordKind;
use serde_json::Value;

use crate::error::{BuildError, BuildResult};
use crate::record::{type_name, MetadataRecord};

/// How an input value becomes RDF terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// A single literal; `tagged` adds the configured language tag.
    Text { tagged: bool },
    /// An absolute IRI, any scheme.
    Iri,
    /// A `YYYY-MM-DD` date, written as `xsd:date`.
    Date,
    /// An IRI, compact name, or legacy namespace handle.
    Reference,
    /// A list of literals, one statement each.
    TextList { tagged: bool },
}

/// One optional input key and the statements it produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub key: &'static str,
    pub predicates: &'static [&'static str],
    pub value: FieldValue,
}

const TITLE: &[&str] = &[rdfs::LABEL, dct::TITLE];

const fn rule(key: &'static str, predicates: &'static [&'static str], value: FieldValue) -> FieldRule {
    FieldRule {
        key,
        predicates,
        value,
    }
}

pub const PUBLISHING_POINT_FIELDS: &[FieldRule] = &[
    rule("title", TITLE, FieldValue::Text { tagged: true }),
    rule("des", &[dct::DESCRIPTION], FieldValue::Text { tagged: false }),
];

pub const CATALOG_FIELDS: &[FieldRule] = &[
    rule("title", TITLE, FieldValue::Text { tagged: true }),
    rule("des", &[dct::DESCRIPTION], FieldValue::Text { tagged: false }),
    rule("publisher", &[dct::PUBLISHER], FieldValue::Iri),
    rule("issued", &[dct::ISSUED], FieldValue::Date),
    rule("modified", &[dct::MODIFIED], FieldValue::Date),
    rule("theme_taxonomy", &[dcat::THEME_TAXONOMY], FieldValue::Reference),
];

pub const DATASET_FIELDS: &[FieldRule] = &[
    rule("title", TITLE, FieldValue::Text { tagged: true }),
    rule("des", &[dct::DESCRIPTION], FieldValue::Text { tagged: true }),
    rule("publisher", &[dct::PUBLISHER], FieldValue::Iri),
    rule("issued", &[dct::ISSUED], FieldValue::Date),
    rule("modified", &[dct::MODIFIED], FieldValue::Date),
    rule("landing_page", &[dcat::LANDING_PAGE], FieldValue::Iri),
    rule("keywords", &[dcat::KEYWORD], FieldValue::TextList { tagged: true }),
    rule("theme", &[dcat::THEME], FieldValue::Reference),
];

pub const DISTRIBUTION_FIELDS: &[FieldRule] = &[
    rule("title", TITLE, FieldValue::Text { tagged: false }),
    rule("des", &[dct::DESCRIPTION], FieldValue::Text { tagged: true }),
    rule("license", &[dct::LICENSE], FieldValue::Iri),
    rule("access_url", &[dcat::ACCESS_URL], FieldValue::Iri),
    rule("download_url", &[dcat::DOWNLOAD_URL], FieldValue::Iri),
    rule("media_types", &[dcat::MEDIA_TYPE], FieldValue::TextList { tagged: false }),
];

/// The optional-field table for `kind`.
pub fn fields_for(kind: RecordKind) -> &'static [FieldRule] {
    match kind {
        RecordKind::PublishingPoint => PUBLISHING_POINT_FIELDS,
        RecordKind::Catalog => CATALOG_FIELDS,
        RecordKind::Dataset => DATASET_FIELDS,
        RecordKind::Distribution => DISTRIBUTION_FIELDS,
    }
}

impl FieldRule {
    /// Terms produced by `value`, validated against this rule.
    pub fn terms(&self, value: &Value, kind: RecordKind, language: &str) -> BuildResult<Vec<Term>> {
        let invalid = |reason: String| BuildError::InvalidInput { kind, reason };

        match self.value {
            FieldValue::Text { tagged } => {
                let text = scalar_text(value)
                    .ok_or_else(|| invalid(format!("'{}' must be text, got {}", self.key, type_name(value))))?;
                Ok(vec![text_term(&text, tagged, language)?])
            }
            FieldValue::TextList { tagged } => {
                let items = value
                    .as_array()
                    .ok_or_else(|| invalid(format!("'{}' must be a list, got {}", self.key, type_name(value))))?;
                items
                    .iter()
                    .map(|item| {
                        let text = scalar_text(item).ok_or_else(|| {
                            invalid(format!(
                                "'{}' entries must be text, got {}",
                                self.key,
                                type_name(item)
                            ))
                        })?;
                        text_term(&text, tagged, language)
                    })
                    .collect()
            }
            FieldValue::Iri => {
                let raw = value
                    .as_str()
                    .ok_or_else(|| invalid(format!("'{}' must be an IRI string, got {}", self.key, type_name(value))))?;
                let iri = NamedNode::new(raw.trim())
                    .map_err(|e| invalid(format!("'{}' is not an absolute IRI ({raw:?}): {e}", self.key)))?;
                Ok(vec![iri.into()])
            }
            FieldValue::Date => {
                let raw = value
                    .as_str()
                    .ok_or_else(|| invalid(format!("'{}' must be a date string", self.key)))?;
                let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                    invalid(format!("'{}' is not a YYYY-MM-DD date ({raw:?}): {e}", self.key))
                })?;
                Ok(vec![term::date(date.format("%Y-%m-%d").to_string()).into()])
            }
            FieldValue::Reference => {
                let iri = value
                    .as_str()
                    .and_then(vocab::resolve_reference)
                    .ok_or_else(|| invalid(format!("'{}' is not a resolvable reference: {value}", self.key)))?;
                let iri = NamedNode::new(iri.as_str())
                    .map_err(|e| invalid(format!("'{}' resolves to a malformed IRI <{iri}>: {e}", self.key)))?;
                Ok(vec![iri.into()])
            }
        }
    }
}

/// Statements for every optional field present in `record`, in table order.
pub fn apply(subject: &str, record: &MetadataRecord<'_>, language: &str) -> BuildResult<Vec<Statement>> {
    let subject = term::iri(subject)?;
    let mut statements = Vec::new();
    for rule in fields_for(record.kind()) {
        let Some(value) = record.get(rule.key).filter(|v| !v.is_null()) else {
            continue;
        };
        for object in rule.terms(value, record.kind(), language)? {
            for predicate in rule.predicates {
                statements.push(Statement::new(subject.clone(), term::iri(predicate)?, object.clone()));
            }
        }
    }
    Ok(statements)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text_term(text: &str, tagged: bool, language: &str) -> BuildResult<Term> {
    if tagged {
        Ok(term::lang_string(text, language)?.into())
    } else {
        Ok(term::string(text).into())
    }
}
