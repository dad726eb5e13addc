//! Identifier registry for the FAIR Data Point graph.
//!
//! Every record identifier used in a graph -- publishing point, catalog,
//! dataset, distribution -- lives in a single namespace. An identifier is
//! accepted exactly once, whatever kind it is registered under; this is the
//! primary structural-integrity guard of the hierarchy builder.
//!
//! Catalog and dataset identifiers are *claimed* by their parent record
//! before the child record itself is filled in. Lookups against the registry
//! are how the builder checks that a child was declared by its parent.
//!
//! # Modules
//!
//! - [`error`]: Error types for registry operations
//! - [`types`]: [`RegistryEntry`]
//! - [`traits`]: The [`IdentifierRegistry`] trait defining the storage interface
//! - [`names`]: Identifier syntax validation
//! - [`memory`]: In-memory [`InMemoryIdentifierRegistry`]

pub mod error;
pub mod memory;
pub mod names;
pub mod traits;
pub mod types;

pub use error::{RegistryError, Result};
pub use memory::InMemoryIdentifierRegistry;
pub use names::validate_identifier;
pub use traits::IdentifierRegistry;
pub use types::RegistryEntry;
