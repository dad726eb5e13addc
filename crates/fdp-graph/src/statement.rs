use std::fmt;

use crate::error::GraphResult;
use crate::term::{self, NamedNode, NamedOrBlankNode, Term, Triple};

/// A single (subject, predicate, object) fact.
///
/// Subjects and predicates are IRIs by construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Statement(Triple);

impl Statement {
    pub fn new(subject: NamedNode, predicate: NamedNode, object: impl Into<Term>) -> Self {
        Self(Triple::new(subject, predicate, object))
    }

    /// Parse `subject` and `predicate` as IRIs.
    pub fn about(subject: &str, predicate: &str, object: impl Into<Term>) -> GraphResult<Self> {
        Ok(Self::new(term::iri(subject)?, term::iri(predicate)?, object))
    }

    pub fn subject(&self) -> &NamedOrBlankNode {
        &self.0.subject
    }

    pub fn predicate(&self) -> &NamedNode {
        &self.0.predicate
    }

    pub fn object(&self) -> &Term {
        &self.0.object
    }

    pub fn as_triple(&self) -> &Triple {
        &self.0
    }
}

/// N-Triples line without the trailing newline.
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .", self.0)
    }
}
