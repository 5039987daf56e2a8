//! Service trait for record storage

use crate::core::record::Record;
use anyhow::Result;
use async_trait::async_trait;

/// Source of the records shown on the dashboard
///
/// Stores hand out snapshots; the filter/sort engine works on those and never
/// writes back.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records in ledger order
    async fn list(&self) -> Result<Vec<Record>>;

    /// Get a record by id
    async fn get(&self, id: &str) -> Result<Option<Record>>;

    /// Replace the whole collection (a new ledger was loaded)
    async fn replace_all(&self, records: Vec<Record>) -> Result<()>;

    /// Number of records
    async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }
}
