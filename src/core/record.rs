//! Persisted record abstraction
//!
//! A record is the stored form of an entity. It receives its identifier from
//! the store on first insert and keeps it for life. Records compare by
//! identity alone: two records are equal only when both carry the same
//! identifier, so two unsaved records are never equal, even to themselves.

use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

/// Store-assigned numeric identifier
pub type RecordId = u64;

/// Identity equality for records: equal only when both ids are set and match
pub fn same_identity(left: Option<RecordId>, right: Option<RecordId>) -> bool {
    matches!((left, right), (Some(a), Some(b)) if a == b)
}

/// Base trait for every persisted record
pub trait Record:
    Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Table name used in logs and store errors (e.g. "orders")
    fn table() -> &'static str;

    /// The identifier, absent until the first successful insert
    fn id(&self) -> Option<RecordId>;

    /// Set the identifier. Only stores call this.
    fn assign_id(&mut self, id: RecordId);

    /// Values of columns declared unique, as `(column, value)` pairs.
    ///
    /// Absent values are skipped.
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
