//! In-memory identifier registry.
//!
//! [`InMemoryIdentifierRegistry`] keeps every entry in a `HashMap` behind a
//! `RwLock`, plus the registration order for deterministic listing.

use std::collections::HashMap;
use std::sync::RwLock;

use fdp_types::RecordKind;
use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::names::validate_identifier;
use crate::traits::IdentifierRegistry;
use crate::types::RegistryEntry;

#[derive(Clone, Debug, Default)]
struct Entries {
    kinds: HashMap<String, RecordKind>,
    order: Vec<String>,
}

/// An in-memory implementation of [`IdentifierRegistry`].
///
/// Data is lost when the registry is dropped. Each instance is an
/// independent namespace: the same identifier may be registered in two
/// different registries.
#[derive(Debug, Default)]
pub struct InMemoryIdentifierRegistry {
    entries: RwLock<Entries>,
}

impl InMemoryIdentifierRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered identifiers.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.order.len())
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Independent copy of the current state.
    pub fn snapshot(&self) -> Result<Self> {
        let entries = self.read()?.clone();
        Ok(Self {
            entries: RwLock::new(entries),
        })
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Entries>> {
        self.entries
            .read()
            .map_err(|e| RegistryError::LockPoisoned(e.to_string()))
    }
}

impl IdentifierRegistry for InMemoryIdentifierRegistry {
    fn register(&self, id: &str, kind: RecordKind) -> Result<()> {
        validate_identifier(id)?;

        let mut entries = self
            .entries
            .write()
            .map_err(|e| RegistryError::LockPoisoned(e.to_string()))?;

        if let Some(existing) = entries.kinds.get(id) {
            return Err(RegistryError::AlreadyRegistered {
                id: id.to_string(),
                existing: *existing,
                attempted: kind,
            });
        }

        entries.kinds.insert(id.to_string(), kind);
        entries.order.push(id.to_string());
        debug!(id, %kind, "registered identifier");
        Ok(())
    }

    fn kind_of(&self, id: &str) -> Result<Option<RecordKind>> {
        Ok(self.read()?.kinds.get(id).copied())
    }

    fn entries(&self) -> Result<Vec<RegistryEntry>> {
        let entries = self.read()?;
        Ok(entries
            .order
            .iter()
            .enumerate()
            .filter_map(|(seq, id)| {
                entries.kinds.get(id).map(|kind| RegistryEntry {
                    id: id.clone(),
                    kind: *kind,
                    seq: seq as u64,
                })
            })
            .collect())
    }
}
