//! JSON-LD writer
//!
//! Formats a partition as `{"@context": {...}, "@graph": [...]}` with one
//! node object per subject. Predicates and `@type` values are compacted
//! against the bound prefixes; `@id` values stay expanded.

use std::collections::BTreeSet;

use fdp_graph::term::NamedOrBlankNode;
use fdp_graph::{Literal, Partition, Statement, Term};
use fdp_types::vocab::{self, rdf, xsd};
use serde_json::{json, Map, Value as JsonValue};

/// Format a partition as a JSON-LD document.
pub fn format_jsonld(partition: &Partition) -> JsonValue {
    let statements = partition.sorted();
    let mut used = BTreeSet::new();
    let mut graph = Vec::new();

    let mut i = 0;
    while i < statements.len() {
        let subject = statements[i].subject();
        let end = statements[i..]
            .iter()
            .position(|s| s.subject() != subject)
            .map_or(statements.len(), |n| i + n);

        graph.push(node_object(subject, &statements[i..end], &mut used));
        i = end;
    }

    let mut context = Map::new();
    for (prefix, ns) in vocab::PREFIXES {
        if used.contains(prefix) {
            context.insert(prefix.to_string(), JsonValue::String(ns.to_string()));
        }
    }

    json!({
        "@context": context,
        "@graph": graph,
    })
}

fn node_object(
    subject: &NamedOrBlankNode,
    statements: &[&Statement],
    used: &mut BTreeSet<&'static str>,
) -> JsonValue {
    let mut node = Map::new();
    node.insert("@id".into(), JsonValue::String(node_id(subject)));

    let mut types = Vec::new();
    for st in statements {
        let predicate = st.predicate().as_str();
        if predicate == rdf::TYPE {
            if let Term::NamedNode(class) = st.object() {
                types.push(JsonValue::String(compact(class.as_str(), used)));
                continue;
            }
        }
        let key = compact(predicate, used);
        let value = object_value(st.object(), used);
        match node.get_mut(&key) {
            Some(JsonValue::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = JsonValue::Array(vec![first, value]);
            }
            None => {
                node.insert(key, value);
            }
        }
    }

    match types.len() {
        0 => {}
        1 => {
            node.insert("@type".into(), types.remove(0));
        }
        _ => {
            node.insert("@type".into(), JsonValue::Array(types));
        }
    }

    JsonValue::Object(node)
}

fn node_id(node: &NamedOrBlankNode) -> String {
    match node {
        NamedOrBlankNode::NamedNode(iri) => iri.as_str().to_string(),
        NamedOrBlankNode::BlankNode(blank) => format!("_:{}", blank.as_str()),
    }
}

fn object_value(term: &Term, used: &mut BTreeSet<&'static str>) -> JsonValue {
    match term {
        Term::Literal(lit) => literal_value(lit, used),
        Term::NamedNode(iri) => json!({ "@id": iri.as_str() }),
        _ => json!({ "@id": term.to_string() }),
    }
}

fn literal_value(lit: &Literal, used: &mut BTreeSet<&'static str>) -> JsonValue {
    if let Some(lang) = lit.language() {
        json!({ "@value": lit.value(), "@language": lang })
    } else if lit.datatype().as_str() == xsd::STRING {
        JsonValue::String(lit.value().to_string())
    } else {
        json!({ "@value": lit.value(), "@type": compact(lit.datatype().as_str(), used) })
    }
}

fn compact(iri: &str, used: &mut BTreeSet<&'static str>) -> String {
    match vocab::compact(iri) {
        Some((prefix, local)) => {
            used.insert(prefix);
            format!("{prefix}:{local}")
        }
        None => iri.to_string(),
    }
}
