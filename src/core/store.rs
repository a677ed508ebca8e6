//! Record store contract

use crate::core::error::StoreError;
use crate::core::query::{Page, PageRequest};
use crate::core::record::{Record, RecordId};
use async_trait::async_trait;

/// Persistence for one entity kind
///
/// The concrete engine is pluggable. Each single-record operation is atomic;
/// nothing spans several operations, so callers doing read-then-write get
/// last-write-wins behavior.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Persist a record, assigning the next identifier when it has none.
    ///
    /// A record that already carries an identifier replaces the stored one.
    async fn insert(&self, record: R) -> Result<R, StoreError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<R>, StoreError>;

    /// Snapshot of every record, in identifier order
    async fn find_all(&self) -> Result<Vec<R>, StoreError>;

    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<R>, StoreError>;

    async fn exists_by_id(&self, id: RecordId) -> Result<bool, StoreError>;

    /// Remove a record. Deleting an absent id is not an error here.
    async fn delete_by_id(&self, id: RecordId) -> Result<(), StoreError>;
}
