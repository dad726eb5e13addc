//! The [`IdentifierRegistry`] trait defining the registry interface.

use fdp_types::RecordKind;

use crate::error::Result;
use crate::types::RegistryEntry;

/// Append-only registry of record identifiers.
///
/// Implementations must uphold one invariant: an identifier string, once
/// registered under any [`RecordKind`], can never be registered again under
/// the same or a different kind. There is no removal operation.
pub trait IdentifierRegistry: Send + Sync {
    /// Register `id` under `kind`.
    ///
    /// Fails with [`RegistryError::AlreadyRegistered`](crate::RegistryError::AlreadyRegistered)
    /// if `id` is already present, and with
    /// [`RegistryError::InvalidIdentifier`](crate::RegistryError::InvalidIdentifier)
    /// if it cannot be used in a resource address.
    fn register(&self, id: &str, kind: RecordKind) -> Result<()>;

    /// The kind `id` was registered under, or `None` if it is unknown.
    fn kind_of(&self, id: &str) -> Result<Option<RecordKind>>;

    /// All entries in registration order.
    fn entries(&self) -> Result<Vec<RegistryEntry>>;

    /// Check whether `id` has been registered under any kind.
    fn is_registered(&self, id: &str) -> Result<bool> {
        Ok(self.kind_of(id)?.is_some())
    }

    /// Identifiers registered under `kind`, in registration order.
    fn ids_of_kind(&self, kind: RecordKind) -> Result<Vec<String>> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.id)
            .collect())
    }

    /// Register every id in `ids` under `kind`, stopping at the first failure.
    ///
    /// Ids registered before the failing one stay registered.
    fn register_all(&self, ids: &[String], kind: RecordKind) -> Result<()> {
        ids.iter().try_for_each(|id| self.register(id, kind))
    }
}
