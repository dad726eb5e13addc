//! Namespace IRIs used by FDP metadata.
//!
//! All constants are fully expanded. Compaction to `prefix:local` form is a
//! formatter concern and goes through [`PREFIXES`].

/// RDF vocabulary
pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// RDFS vocabulary
pub mod rdfs {
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:label
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:seeAlso
    pub const SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
}

/// XML Schema datatypes
pub mod xsd {
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:date
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
}

/// Dublin Core terms
pub mod dct {
    pub const NS: &str = "http://purl.org/dc/terms/";

    pub const AGENT: &str = "http://purl.org/dc/terms/Agent";
    pub const IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
    pub const LANGUAGE: &str = "http://purl.org/dc/terms/language";
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    pub const PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
    pub const ISSUED: &str = "http://purl.org/dc/terms/issued";
    pub const MODIFIED: &str = "http://purl.org/dc/terms/modified";
    pub const LICENSE: &str = "http://purl.org/dc/terms/license";
}

/// Data Catalog vocabulary
pub mod dcat {
    pub const NS: &str = "http://www.w3.org/ns/dcat#";

    pub const CATALOG: &str = "http://www.w3.org/ns/dcat#Catalog";
    pub const DATASET_CLASS: &str = "http://www.w3.org/ns/dcat#Dataset";
    pub const DISTRIBUTION_CLASS: &str = "http://www.w3.org/ns/dcat#Distribution";

    /// dcat:dataset (catalog → dataset membership)
    pub const DATASET: &str = "http://www.w3.org/ns/dcat#dataset";
    /// dcat:distribution (dataset → distribution link)
    pub const DISTRIBUTION: &str = "http://www.w3.org/ns/dcat#distribution";

    pub const THEME_TAXONOMY: &str = "http://www.w3.org/ns/dcat#themeTaxonomy";
    pub const THEME: &str = "http://www.w3.org/ns/dcat#theme";
    pub const LANDING_PAGE: &str = "http://www.w3.org/ns/dcat#landingPage";
    pub const KEYWORD: &str = "http://www.w3.org/ns/dcat#keyword";
    pub const ACCESS_URL: &str = "http://www.w3.org/ns/dcat#accessURL";
    pub const DOWNLOAD_URL: &str = "http://www.w3.org/ns/dcat#downloadURL";
    pub const MEDIA_TYPE: &str = "http://www.w3.org/ns/dcat#mediaType";
}

/// ISO 639-1 language codes (Library of Congress)
pub mod lang {
    pub const NS: &str = "http://id.loc.gov/vocabulary/iso639-1/";
}

/// DBpedia resources (theme values)
pub mod dbp {
    pub const NS: &str = "http://dbpedia.org/resource/";
}

/// Prefix bindings, in the order formatters declare them.
pub const PREFIXES: &[(&str, &str)] = &[
    ("dbp", dbp::NS),
    ("dcat", dcat::NS),
    ("dct", dct::NS),
    ("lang", lang::NS),
    ("rdf", rdf::NS),
    ("rdfs", rdfs::NS),
    ("xsd", xsd::NS),
];

/// Legacy upper-case namespace handles (`DBPEDIA.Biology`) and their prefixes.
const LEGACY_HANDLES: &[(&str, &str)] = &[
    ("DBPEDIA", "dbp"),
    ("DCAT", "dcat"),
    ("DCTERMS", "dct"),
    ("LANG", "lang"),
    ("RDF", "rdf"),
    ("RDFS", "rdfs"),
    ("XSD", "xsd"),
];

/// Namespace IRI bound to `prefix`.
pub fn namespace(prefix: &str) -> Option<&'static str> {
    PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, ns)| *ns)
}

/// IRI of a language code in the `lang:` namespace.
pub fn language_iri(code: &str) -> String {
    format!("{}{}", lang::NS, code)
}

/// Resolve a resource reference to an IRI string.
///
/// Compact names with a bound prefix (`dbp:Biology`) and legacy handles
/// (`DBPEDIA.Biology`) are expanded. Any other string carrying a scheme
/// (`https://...`, `ftp://...`, `mailto:...`) is returned unchanged; its
/// syntax is checked when the graph term is built.
pub fn resolve_reference(reference: &str) -> Option<String> {
    let reference = reference.trim();
    if let Some((prefix, local)) = reference.split_once(':') {
        return match namespace(prefix) {
            Some(ns) => valid_local(local).then(|| format!("{ns}{local}")),
            None => (!prefix.is_empty()).then(|| reference.to_string()),
        };
    }
    let (handle, local) = reference.split_once('.')?;
    let prefix = LEGACY_HANDLES
        .iter()
        .find(|(h, _)| *h == handle)
        .map(|(_, p)| *p)?;
    let ns = namespace(prefix)?;
    valid_local(local).then(|| format!("{ns}{local}"))
}

/// Split an expanded IRI into `(prefix, local)` if a bound namespace covers
/// it and the local part is safe to write unescaped.
pub fn compact(iri: &str) -> Option<(&'static str, &str)> {
    PREFIXES.iter().find_map(|(prefix, ns)| {
        let local = iri.strip_prefix(ns)?;
        valid_local(local).then_some((*prefix, local))
    })
}

fn valid_local(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return false,
    }
    !local.ends_with('.')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
