use std::collections::HashSet;

use crate::statement::Statement;
use crate::term::Term;

/// The statements filed under one resource address.
///
/// Insertion order is preserved; identical statements are stored once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    address: String,
    statements: Vec<Statement>,
    index: HashSet<Statement>,
}

impl Partition {
    /// Create an empty partition for `address`.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// The resource address this partition is keyed by.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Add a statement. Returns `false` if it was already present.
    pub fn insert(&mut self, statement: Statement) -> bool {
        if !self.index.insert(statement.clone()) {
            return false;
        }
        self.statements.push(statement);
        true
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    pub fn contains(&self, statement: &Statement) -> bool {
        self.index.contains(statement)
    }

    /// Objects of every statement using `predicate`, in insertion order.
    pub fn objects(&self, predicate: &str) -> Vec<&Term> {
        self.statements
            .iter()
            .filter(|s| s.predicate().as_str() == predicate)
            .map(Statement::object)
            .collect()
    }

    /// Number of statements using `predicate`.
    pub fn count(&self, predicate: &str) -> usize {
        self.objects(predicate).len()
    }

    /// Statements ordered by their N-Triples form, for deterministic output.
    pub fn sorted(&self) -> Vec<&Statement> {
        let mut sorted: Vec<&Statement> = self.statements.iter().collect();
        sorted.sort_by_cached_key(|s| s.to_string());
        sorted
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
