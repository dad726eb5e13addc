use crate::error::GraphResult;
use crate::partition::Partition;
use crate::statement::Statement;

/// Statement store organized into named partitions.
///
/// All implementations must satisfy these invariants:
/// - A partition is keyed by its resource address and is created on first
///   use; creating it again is a no-op.
/// - Statements are only ever added. Nothing is rewritten or removed.
/// - A statement added to one partition never appears in another unless it
///   is added there explicitly.
pub trait GraphStore: Send + Sync {
    /// Get-or-create the partition for `address`.
    ///
    /// Returns `true` if the partition did not exist before.
    fn context(&self, address: &str) -> GraphResult<bool>;

    /// Add `statement` to the partition for `address`, creating the
    /// partition if needed.
    ///
    /// Returns `false` if an identical statement was already present.
    fn add_statement(&self, address: &str, statement: Statement) -> GraphResult<bool>;

    /// Copy of the partition for `address`.
    ///
    /// Returns `Ok(None)` if no partition was ever created there.
    fn partition(&self, address: &str) -> GraphResult<Option<Partition>>;

    /// Every partition address, sorted.
    fn addresses(&self) -> GraphResult<Vec<String>>;

    /// Number of statements filed under `address` (zero if unknown).
    fn statement_count(&self, address: &str) -> GraphResult<usize> {
        Ok(self.partition(address)?.map_or(0, |p| p.len()))
    }

    /// Add several statements to one partition.
    ///
    /// Default implementation calls `add_statement()` for each statement and
    /// returns how many were new.
    fn add_statements(&self, address: &str, statements: Vec<Statement>) -> GraphResult<usize> {
        let mut added = 0;
        for statement in statements {
            if self.add_statement(address, statement)? {
                added += 1;
            }
        }
        Ok(added)
    }
}
