//! N-Triples writer.

use fdp_graph::Partition;
use oxigraph::io::{RdfFormat, RdfSerializer};

use crate::error::FormatResult;

/// Format a partition as N-Triples, one statement per line.
pub fn format_ntriples(partition: &Partition) -> FormatResult<Vec<u8>> {
    crate::write_statements(
        RdfSerializer::from_format(RdfFormat::NTriples),
        &partition.sorted(),
    )
}
