//! Turtle writer.
//!
//! Declares only the prefixes the partition actually uses; layout is left
//! to the serializer.

use std::collections::BTreeSet;

use fdp_graph::term::NamedOrBlankNode;
use fdp_graph::{Partition, Statement, Term};
use fdp_types::vocab::{self, rdf, xsd};
use oxigraph::io::{RdfFormat, RdfSerializer};

use crate::error::{FormatError, FormatResult};

/// Format a partition as Turtle. An empty partition yields no bytes.
pub fn format_turtle(partition: &Partition) -> FormatResult<Vec<u8>> {
    let statements = partition.sorted();
    if statements.is_empty() {
        return Ok(Vec::new());
    }

    let mut used = BTreeSet::new();
    for st in &statements {
        collect_prefixes(st, &mut used);
    }

    let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
    for (prefix, ns) in vocab::PREFIXES {
        if used.contains(prefix) {
            serializer = serializer
                .with_prefix(*prefix, *ns)
                .map_err(|e| FormatError::Serialization(e.to_string()))?;
        }
    }
    crate::write_statements(serializer, &statements)
}

fn collect_prefixes(st: &Statement, used: &mut BTreeSet<&'static str>) {
    let mut note = |iri: &str| {
        if let Some((prefix, _)) = vocab::compact(iri) {
            used.insert(prefix);
        }
    };
    if let NamedOrBlankNode::NamedNode(subject) = st.subject() {
        note(subject.as_str());
    }
    if st.predicate().as_str() != rdf::TYPE {
        note(st.predicate().as_str());
    }
    match st.object() {
        Term::NamedNode(node) => note(node.as_str()),
        Term::Literal(lit) if lit.language().is_none() && lit.datatype().as_str() != xsd::STRING => {
            note(lit.datatype().as_str())
        }
        _ => {}
    }
}
