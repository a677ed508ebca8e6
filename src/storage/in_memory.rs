//! In-memory implementation of RecordStore for testing and development

use crate::core::error::StoreError;
use crate::core::query::{Page, PageRequest, PaginationMeta};
use crate::core::record::{Record, RecordId};
use crate::core::store::RecordStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct Table<R> {
    rows: BTreeMap<RecordId, R>,
    last_id: RecordId,
}

/// In-memory record store
///
/// Rows are kept in identifier order. Identifiers come from a per-store
/// sequence starting at 1 and are never handed out twice, even after a
/// delete. Columns reported by [`Record::unique_keys`] are enforced on
/// every insert.
#[derive(Debug, Clone)]
pub struct InMemoryRecordStore<R: Record> {
    table: Arc<RwLock<Table<R>>>,
}

impl<R: Record> InMemoryRecordStore<R> {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            })),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table<R>>, StoreError> {
        self.table.read().map_err(|e| StoreError::LockPoisoned {
            table: R::table().to_string(),
            message: format!("Failed to acquire read lock: {}", e),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table<R>>, StoreError> {
        self.table.write().map_err(|e| StoreError::LockPoisoned {
            table: R::table().to_string(),
            message: format!("Failed to acquire write lock: {}", e),
        })
    }
}

impl<R: Record> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_unique<R: Record>(table: &Table<R>, record: &R) -> Result<(), StoreError> {
    for (field, value) in record.unique_keys() {
        let taken = table.rows.values().any(|row| {
            row.id() != record.id()
                && row
                    .unique_keys()
                    .iter()
                    .any(|(other_field, other_value)| *other_field == field && *other_value == value)
        });

        if taken {
            return Err(StoreError::UniqueViolation {
                table: R::table().to_string(),
                field: field.to_string(),
                value,
            });
        }
    }
    Ok(())
}

#[async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    async fn insert(&self, mut record: R) -> Result<R, StoreError> {
        let mut table = self.write()?;
        check_unique(&table, &record)?;

        let id = match record.id() {
            Some(id) => id,
            None => {
                table.last_id += 1;
                let id = table.last_id;
                record.assign_id(id);
                id
            }
        };

        table.rows.insert(id, record.clone());
        tracing::debug!(table = R::table(), id, "record stored");

        Ok(record)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<R>, StoreError> {
        let table = self.read()?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<R>, StoreError> {
        let table = self.read()?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<R>, StoreError> {
        let table = self.read()?;
        let total = table.rows.len();
        let data = table
            .rows
            .values()
            .skip(request.offset())
            .take(request.size)
            .cloned()
            .collect();

        Ok(Page {
            data,
            pagination: PaginationMeta::new(request.page, request.size, total),
        })
    }

    async fn exists_by_id(&self, id: RecordId) -> Result<bool, StoreError> {
        let table = self.read()?;
        Ok(table.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<(), StoreError> {
        let mut table = self.write()?;
        if table.rows.remove(&id).is_some() {
            tracing::debug!(table = R::table(), id, "record removed");
        }
        Ok(())
    }
}
