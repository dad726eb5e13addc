//! Partitioned statement storage for the FAIR Data Point graph.
//!
//! The graph is split into named partitions, one per resource address. A
//! partition holds the statements describing that resource and is
//! addressable and serializable on its own, the way a named graph in a quad
//! store would be.
//!
//! # Statement Model
//!
//! Terms are the [oxigraph](https://crates.io/crates/oxigraph) model types.
//! The [`term`] constructors parse IRIs and language tags, so a malformed
//! value is rejected before it reaches a partition.
//!
//! - [`Statement`]: a (subject, predicate, object) triple with IRI subject
//!   and predicate
//! - [`Partition`]: the statements filed under one address
//!
//! # Storage Backends
//!
//! All backends implement the [`GraphStore`] trait:
//!
//! - [`InMemoryGraphStore`]: `HashMap`-based store
//!
//! # Design Rules
//!
//! 1. Partitions are created implicitly on first write (or explicitly via
//!    [`GraphStore::context`]); creation is idempotent.
//! 2. Partitions have set semantics: adding an identical statement twice
//!    stores it once.
//! 3. The store is append-only. There is no statement removal.
//! 4. The store never interprets statements.

pub mod error;
pub mod memory;
pub mod partition;
pub mod statement;
pub mod term;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{GraphError, GraphResult};
pub use memory::InMemoryGraphStore;
pub use partition::Partition;
pub use statement::Statement;
pub use term::{Literal, NamedNode, Term};
pub use traits::GraphStore;
