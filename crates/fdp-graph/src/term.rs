//! RDF terms
//!
//! Terms are the oxigraph model types. The constructors here parse their
//! input, so an IRI held by the graph is always absolute and well-formed
//! and a language tag is always valid BCP47.

use oxigraph::model::vocab::xsd;
pub use oxigraph::model::{Literal, NamedNode, NamedOrBlankNode, Term, Triple};

use crate::error::{GraphError, GraphResult};

/// Parse `iri` as an absolute IRI. Any scheme is accepted.
pub fn iri(iri: &str) -> GraphResult<NamedNode> {
    NamedNode::new(iri).map_err(|e| GraphError::InvalidIri {
        iri: iri.to_string(),
        reason: e.to_string(),
    })
}

/// Plain string literal (`xsd:string`).
pub fn string(value: impl Into<String>) -> Literal {
    Literal::new_simple_literal(value)
}

/// Language-tagged string literal. The tag is normalized to lowercase.
pub fn lang_string(value: impl Into<String>, language: impl Into<String>) -> GraphResult<Literal> {
    let value = value.into();
    Literal::new_language_tagged_literal(value.clone(), language).map_err(|e| {
        GraphError::InvalidLiteral {
            value,
            reason: e.to_string(),
        }
    })
}

/// `xsd:date` literal. The lexical form is not checked.
pub fn date(value: impl Into<String>) -> Literal {
    Literal::new_typed_literal(value, xsd::DATE)
}
