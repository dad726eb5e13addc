//! Partition serialization.

use fdp_format::Format;
use fdp_graph::GraphStore;
use tracing::debug;

use crate::error::BuildResult;

/// Serialize the partition at `address` held by `store`.
///
/// Returns `Ok(None)` when the partition does not exist or holds no
/// statements. An empty partition has nothing to show; it is not an error.
pub fn serialize_partition<S: GraphStore + ?Sized>(
    store: &S,
    address: &str,
    format: Format,
) -> BuildResult<Option<Vec<u8>>> {
    let Some(partition) = store.partition(address)? else {
        debug!(address, "no partition to serialize");
        return Ok(None);
    };
    if partition.is_empty() {
        debug!(address, "partition is empty");
        return Ok(None);
    }
    Ok(Some(fdp_format::serialize(&partition, format)?))
}

/// Like [`serialize_partition`], parsing `token` first.
///
/// An unsupported token is an error even when the partition is empty.
pub fn serialize_partition_as<S: GraphStore + ?Sized>(
    store: &S,
    address: &str,
    token: &str,
) -> BuildResult<Option<Vec<u8>>> {
    let format: Format = token.parse()?;
    serialize_partition(store, address, format)
}
