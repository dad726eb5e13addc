use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::partition::Partition;
use crate::statement::Statement;
use crate::traits::GraphStore;

/// In-memory, HashMap-based partitioned graph store.
///
/// All partitions are held behind a `RwLock`, so a finished store can be
/// read from several threads at once. Partitions are cloned on read.
#[derive(Default)]
pub struct InMemoryGraphStore {
    partitions: RwLock<HashMap<String, Partition>>,
}

impl InMemoryGraphStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of partitions (including empty ones created via `context`).
    pub fn len(&self) -> GraphResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns `true` if no partition exists.
    pub fn is_empty(&self) -> GraphResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Independent copy of the current state.
    pub fn snapshot(&self) -> GraphResult<Self> {
        let partitions = self.read()?.clone();
        Ok(Self {
            partitions: RwLock::new(partitions),
        })
    }

    fn read(&self) -> GraphResult<RwLockReadGuard<'_, HashMap<String, Partition>>> {
        self.partitions
            .read()
            .map_err(|e| GraphError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> GraphResult<RwLockWriteGuard<'_, HashMap<String, Partition>>> {
        self.partitions
            .write()
            .map_err(|e| GraphError::LockPoisoned(e.to_string()))
    }
}

impl GraphStore for InMemoryGraphStore {
    fn context(&self, address: &str) -> GraphResult<bool> {
        if address.is_empty() {
            return Err(GraphError::EmptyAddress);
        }
        let mut map = self.write()?;
        if map.contains_key(address) {
            return Ok(false);
        }
        map.insert(address.to_string(), Partition::new(address));
        debug!(address, "created partition");
        Ok(true)
    }

    fn add_statement(&self, address: &str, statement: Statement) -> GraphResult<bool> {
        if address.is_empty() {
            return Err(GraphError::EmptyAddress);
        }
        let mut map = self.write()?;
        let partition = map
            .entry(address.to_string())
            .or_insert_with(|| Partition::new(address));
        Ok(partition.insert(statement))
    }

    fn partition(&self, address: &str) -> GraphResult<Option<Partition>> {
        Ok(self.read()?.get(address).cloned())
    }

    fn addresses(&self) -> GraphResult<Vec<String>> {
        let mut addresses: Vec<String> = self.read()?.keys().cloned().collect();
        addresses.sort();
        Ok(addresses)
    }

    fn statement_count(&self, address: &str) -> GraphResult<usize> {
        Ok(self.read()?.get(address).map_or(0, Partition::len))
    }
}

impl std::fmt::Debug for InMemoryGraphStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len().unwrap_or_default();
        f.debug_struct("InMemoryGraphStore")
            .field("partition_count", &count)
            .finish()
    }
}
