//! Entity services: validation, conversion and store orchestration

use crate::config::StatusFilter;
use crate::core::converter::Converter;
use crate::core::entity::EntityKind;
use crate::core::error::{ServiceError, ServiceResult};
use crate::core::query::{Page, PageRequest};
use crate::core::record::RecordId;
use crate::core::rules::{BusinessRules, NoRules};
use crate::core::store::RecordStore;
use crate::core::validation;
use async_trait::async_trait;
use std::sync::Arc;

/// CRUD operations for one entity kind, in wire-shape terms
///
/// Implemented by [`EntityService`] and by decorators such as
/// [`CachedService`](crate::core::cache::CachedService).
#[async_trait]
pub trait CrudService<E: EntityKind>: Send + Sync {
    /// Every record, in store order
    async fn find_all(&self) -> ServiceResult<Vec<E::Wire>>;

    /// `None` is a normal result, not an error
    async fn find_by_id(&self, id: RecordId) -> ServiceResult<Option<E::Wire>>;

    async fn find_all_paginated(&self, request: PageRequest) -> ServiceResult<Page<E::Wire>>;

    /// Validate, store and return the stored form with its new id
    async fn save(&self, wire: Option<E::Wire>) -> ServiceResult<E::Wire>;

    /// Overwrite an existing record's fields
    async fn update(&self, id: RecordId, wire: Option<E::Wire>) -> ServiceResult<E::Wire>;

    async fn delete_by_id(&self, id: RecordId) -> ServiceResult<()>;

    async fn exists_by_id(&self, id: RecordId) -> ServiceResult<bool>;

    async fn find_by_status(&self, status: &str) -> ServiceResult<Vec<E::Wire>>;
}

/// Store-backed service, the only owner of "not found" and "invalid input"
pub struct EntityService<E: EntityKind> {
    store: Arc<dyn RecordStore<E::Record>>,
    rules: Arc<dyn BusinessRules<E>>,
    status_filter: StatusFilter,
}

impl<E: EntityKind> EntityService<E> {
    pub fn new(store: Arc<dyn RecordStore<E::Record>>) -> Self {
        Self {
            store,
            rules: Arc::new(NoRules),
            status_filter: StatusFilter::default(),
        }
    }

    pub fn with_rules(mut self, rules: impl BusinessRules<E> + 'static) -> Self {
        self.rules = Arc::new(rules);
        self
    }

    pub fn with_status_filter(mut self, status_filter: StatusFilter) -> Self {
        self.status_filter = status_filter;
        self
    }
}

#[async_trait]
impl<E: EntityKind> CrudService<E> for EntityService<E> {
    async fn find_all(&self) -> ServiceResult<Vec<E::Wire>> {
        tracing::info!(entity_type = E::TYPE_NAME, "finding all records");
        let records = self.store.find_all().await?;
        Ok(records.iter().map(E::Mapper::to_wire).collect())
    }

    async fn find_by_id(&self, id: RecordId) -> ServiceResult<Option<E::Wire>> {
        tracing::info!(entity_type = E::TYPE_NAME, id, "finding record");
        let record = self.store.find_by_id(id).await?;
        Ok(E::Mapper::to_wire_opt(record.as_ref()))
    }

    async fn find_all_paginated(&self, request: PageRequest) -> ServiceResult<Page<E::Wire>> {
        tracing::info!(
            entity_type = E::TYPE_NAME,
            page = request.page,
            size = request.size,
            "finding page of records"
        );
        let page = self.store.find_all_paged(request).await?;
        Ok(page.map(|record| E::Mapper::to_wire(&record)))
    }

    async fn save(&self, wire: Option<E::Wire>) -> ServiceResult<E::Wire> {
        tracing::info!(entity_type = E::TYPE_NAME, "saving record");
        let wire = validation::validate(E::TYPE_NAME, wire.as_ref())?;
        self.rules.before_save(wire)?;

        let record = E::Mapper::to_record(wire);
        let saved = self.store.insert(record).await?;
        Ok(E::Mapper::to_wire(&saved))
    }

    async fn update(&self, id: RecordId, wire: Option<E::Wire>) -> ServiceResult<E::Wire> {
        tracing::info!(entity_type = E::TYPE_NAME, id, "updating record");
        let mut existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(E::TYPE_NAME, id))?;

        let wire = validation::validate(E::TYPE_NAME, wire.as_ref())?;
        self.rules.before_update(&existing, wire)?;

        E::Mapper::apply_to_record(&mut existing, wire);
        let updated = self.store.insert(existing).await?;
        Ok(E::Mapper::to_wire(&updated))
    }

    async fn delete_by_id(&self, id: RecordId) -> ServiceResult<()> {
        tracing::info!(entity_type = E::TYPE_NAME, id, "deleting record");
        if !self.store.exists_by_id(id).await? {
            return Err(ServiceError::not_found(E::TYPE_NAME, id));
        }
        self.rules.before_delete(id)?;
        self.store.delete_by_id(id).await?;
        Ok(())
    }

    async fn exists_by_id(&self, id: RecordId) -> ServiceResult<bool> {
        Ok(self.store.exists_by_id(id).await?)
    }

    async fn find_by_status(&self, status: &str) -> ServiceResult<Vec<E::Wire>> {
        tracing::info!(entity_type = E::TYPE_NAME, status, "finding records by status");
        let records = self.store.find_all().await?;
        let wires = match self.status_filter {
            StatusFilter::Field if E::has_status_field() => records
                .iter()
                .filter(|record| E::matches_status(record, status))
                .map(E::Mapper::to_wire)
                .collect(),
            _ => records.iter().map(E::Mapper::to_wire).collect(),
        };
        Ok(wires)
    }
}
