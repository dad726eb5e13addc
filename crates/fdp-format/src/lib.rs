//! RDF writers for FAIR Data Point partitions.
//!
//! Each writer turns one [`Partition`] into bytes. Statements are always
//! written in the same order, so the same partition always produces the
//! same output. Turtle and N-Triples go through oxigraph's
//! [`RdfSerializer`]; JSON-LD is built as a `serde_json` document.
//!
//! - **Turtle** (`text/turtle`): prefixed, grouped by subject
//! - **N-Triples** (`application/n-triples`): one statement per line
//! - **JSON-LD** (`application/ld+json`): `{"@context": ..., "@graph": [...]}`
//!
//! # Example
//!
//! ```
//! use fdp_graph::{term, Partition, Statement};
//! use fdp_format::{serialize, Format};
//!
//! let mut partition = Partition::new("http://example.org/fdp");
//! partition.insert(
//!     Statement::about(
//!         "http://example.org/fdp",
//!         "http://purl.org/dc/terms/title",
//!         term::lang_string("Example FDP", "en").unwrap(),
//!     )
//!     .unwrap(),
//! );
//!
//! let format: Format = "text/turtle".parse().unwrap();
//! let bytes = serialize(&partition, format).unwrap();
//! assert!(String::from_utf8(bytes).unwrap().contains("dct:title"));
//! ```

mod error;
mod format;
mod jsonld;
mod ntriples;
mod turtle;

pub use error::{FormatError, FormatResult};
pub use format::Format;
pub use jsonld::format_jsonld;
pub use ntriples::format_ntriples;
pub use turtle::format_turtle;

use fdp_graph::{Partition, Statement};
use oxigraph::io::RdfSerializer;

/// Serialize `partition` in `format`.
pub fn serialize(partition: &Partition, format: Format) -> FormatResult<Vec<u8>> {
    match format {
        Format::Turtle => format_turtle(partition),
        Format::NTriples => format_ntriples(partition),
        Format::JsonLd => {
            let doc = format_jsonld(partition);
            serde_json::to_vec_pretty(&doc).map_err(|e| FormatError::Serialization(e.to_string()))
        }
    }
}

fn write_statements(serializer: RdfSerializer, statements: &[&Statement]) -> FormatResult<Vec<u8>> {
    let mut writer = serializer.for_writer(Vec::new());
    for statement in statements {
        writer.serialize_triple(statement.as_triple())?;
    }
    Ok(writer.finish()?)
}
