//! Foundation types for the FAIR Data Point (FDP) metadata graph.
//!
//! Every other `fdp-*` crate depends on `fdp-types`. It carries the small,
//! dependency-free vocabulary shared by the registry, the partitioned graph
//! store, the codecs, and the hierarchy builder.
//!
//! # Key Types
//!
//! - [`RecordKind`]: The four levels of the metadata tree
//! - [`UriScheme`]: Deterministic resource addresses derived from a base URI
//! - [`vocab`]: Namespace IRIs (RDF, RDFS, XSD, DCTERMS, DCAT, ...) and prefix bindings

pub mod error;
pub mod kind;
pub mod uri;
pub mod vocab;

pub use error::TypeError;
pub use kind::RecordKind;
pub use uri::UriScheme;
