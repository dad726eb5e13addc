//! Hierarchy builder for the FAIR Data Point (FDP) metadata graph.
//!
//! This crate assembles the four-level FDP tree (publishing point,
//! catalogs, datasets, distributions) into a partitioned RDF graph:
//! - [`FairGraph`], the owned builder scoped to one base URI
//! - Claim/fill phases enforcing that every catalog and dataset was declared
//!   by its parent before its own record is filled in
//! - Declarative optional-field tables per record kind ([`fields`])
//! - Partition serialization on demand ([`serialize`])
//! - [`BuilderConfig`], loadable from TOML
//!
//! Build calls must run top-down: [`FairGraph::build_publishing_point`],
//! then [`FairGraph::build_catalogs`], then
//! [`FairGraph::build_datasets_and_distributions`].

pub mod builder;
pub mod config;
pub mod error;
pub mod fields;
pub mod record;
pub mod serialize;

pub use builder::FairGraph;
pub use config::BuilderConfig;
pub use error::{BuildError, BuildResult};
pub use fields::{FieldRule, FieldValue};
pub use record::MetadataRecord;

pub use fdp_format::Format;
pub use fdp_graph::{Partition, Statement, Term};
pub use fdp_types::{RecordKind, UriScheme};
