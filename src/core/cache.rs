//! Read-through caching for entity services
//!
//! LRU caching with an optional time-to-live. Thread-safe with parking_lot
//! RwLock, atomic counters for hit/miss metrics.
//!
//! Every write bumps a generation counter while holding the entry lock. A
//! read-through fill remembers the generation it started at and is dropped
//! if a write landed while the delegate was being read.

use crate::config::CacheConfig;
use crate::core::entity::EntityKind;
use crate::core::error::ServiceResult;
use crate::core::query::{Page, PageRequest};
use crate::core::record::RecordId;
use crate::core::service::CrudService;
use async_trait::async_trait;
use lru::LruCache;
use parking_lot::RwLock;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

struct Slot<V> {
    value: V,
    stored_at: Instant,
}

impl<V> Slot<V> {
    fn new(value: V) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }
}

/// Bounded key/value cache with LRU eviction
pub struct ReadThroughCache<K: Hash + Eq, V: Clone> {
    entries: RwLock<LruCache<K, Slot<V>>>,
    ttl: Option<Duration>,
    generation: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: Hash + Eq, V: Clone> ReadThroughCache<K, V> {
    /// A zero capacity is raised to one
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
            ttl,
            generation: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.write();

        let expired = match entries.get(key) {
            Some(slot) => self.is_expired(slot),
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                return None;
            }
        };

        if expired {
            entries.pop(key);
            self.misses.fetch_add(1, Ordering::Relaxed);
            return None;
        }

        self.hits.fetch_add(1, Ordering::Relaxed);
        entries.get(key).map(|slot| slot.value.clone())
    }

    /// Current write generation, taken before reading the backing source
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Store a value produced by a write
    pub fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.write();
        self.generation.fetch_add(1, Ordering::SeqCst);
        entries.put(key, Slot::new(value));
    }

    /// Store a value read from the backing source, unless a write happened
    /// since `seen` was taken. Returns whether the value was kept.
    pub fn fill(&self, key: K, value: V, seen: u64) -> bool {
        let mut entries = self.entries.write();
        if self.generation.load(Ordering::SeqCst) != seen {
            return false;
        }
        entries.put(key, Slot::new(value));
        true
    }

    pub fn invalidate(&self, key: &K) {
        let mut entries = self.entries.write();
        self.generation.fetch_add(1, Ordering::SeqCst);
        entries.pop(key);
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write();
        self.generation.fetch_add(1, Ordering::SeqCst);
        entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.read();
        CacheStats {
            size: entries.len(),
            capacity: entries.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn is_expired(&self, slot: &Slot<V>) -> bool {
        self.ttl.is_some_and(|ttl| slot.stored_at.elapsed() >= ttl)
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    fn combine(self, other: CacheStats) -> CacheStats {
        CacheStats {
            size: self.size + other.size,
            capacity: self.capacity + other.capacity,
            hits: self.hits + other.hits,
            misses: self.misses + other.misses,
        }
    }
}

/// Caching decorator around any [`CrudService`]
///
/// `find_all` is held in a single slot and `find_by_id` per identifier.
/// Writes invalidate after the delegate succeeds:
///
/// | operation      | effect                                 |
/// |----------------|----------------------------------------|
/// | `save`         | drop the list slot and every id slot   |
/// | `update`       | drop the list slot, refresh the id slot|
/// | `delete_by_id` | drop the list slot and the id slot     |
pub struct CachedService<E: EntityKind> {
    inner: Arc<dyn CrudService<E>>,
    all: ReadThroughCache<(), Vec<E::Wire>>,
    by_id: ReadThroughCache<RecordId, E::Wire>,
}

impl<E: EntityKind> CachedService<E> {
    pub fn new(inner: Arc<dyn CrudService<E>>, config: &CacheConfig) -> Self {
        Self {
            inner,
            all: ReadThroughCache::new(1, config.ttl()),
            by_id: ReadThroughCache::new(config.capacity, config.ttl()),
        }
    }

    /// Combined counters of the list slot and the id slots
    pub fn stats(&self) -> CacheStats {
        self.all.stats().combine(self.by_id.stats())
    }
}

#[async_trait]
impl<E: EntityKind> CrudService<E> for CachedService<E> {
    async fn find_all(&self) -> ServiceResult<Vec<E::Wire>> {
        if let Some(cached) = self.all.get(&()) {
            tracing::debug!(entity_type = E::TYPE_NAME, "cache hit for all records");
            return Ok(cached);
        }
        let seen = self.all.generation();
        let records = self.inner.find_all().await?;
        if !self.all.fill((), records.clone(), seen) {
            tracing::debug!(entity_type = E::TYPE_NAME, "list changed during read, not cached");
        }
        Ok(records)
    }

    async fn find_by_id(&self, id: RecordId) -> ServiceResult<Option<E::Wire>> {
        if let Some(cached) = self.by_id.get(&id) {
            tracing::debug!(entity_type = E::TYPE_NAME, id, "cache hit");
            return Ok(Some(cached));
        }
        let seen = self.by_id.generation();
        let found = self.inner.find_by_id(id).await?;
        if let Some(wire) = &found {
            if !self.by_id.fill(id, wire.clone(), seen) {
                tracing::debug!(entity_type = E::TYPE_NAME, id, "record changed during read, not cached");
            }
        }
        Ok(found)
    }

    async fn find_all_paginated(&self, request: PageRequest) -> ServiceResult<Page<E::Wire>> {
        self.inner.find_all_paginated(request).await
    }

    async fn save(&self, wire: Option<E::Wire>) -> ServiceResult<E::Wire> {
        let saved = self.inner.save(wire).await?;
        self.all.clear();
        self.by_id.clear();
        Ok(saved)
    }

    async fn update(&self, id: RecordId, wire: Option<E::Wire>) -> ServiceResult<E::Wire> {
        let updated = self.inner.update(id, wire).await?;
        self.all.clear();
        self.by_id.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete_by_id(&self, id: RecordId) -> ServiceResult<()> {
        self.inner.delete_by_id(id).await?;
        self.all.clear();
        self.by_id.invalidate(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: RecordId) -> ServiceResult<bool> {
        self.inner.exists_by_id(id).await
    }

    async fn find_by_status(&self, status: &str) -> ServiceResult<Vec<E::Wire>> {
        self.inner.find_by_status(status).await
    }
}
