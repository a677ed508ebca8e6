//! # Shopfront
//!
//! CRUD REST services for a small e-commerce domain: users, products,
//! categories, orders, order items and reviews.
//!
//! Every entity kind runs the same pipeline:
//!
//! ```text
//! HTTP handler → CrudService (cache) → EntityService
//!                                         ├─ validate (validator derive + format rules)
//!                                         ├─ BusinessRules hooks
//!                                         ├─ Converter (wire ⇄ record)
//!                                         └─ RecordStore
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopfront::prelude::*;
//!
//! let config = AppConfig::from_yaml_file("config/shopfront.yaml")?;
//! ServerBuilder::new(config)
//!     .register_catalog()
//!     .serve()
//!     .await?;
//! ```
//!
//! ## Adding an entity kind
//!
//! ```rust,ignore
//! impl_crud_entity!(
//!     record: TagRecord,
//!     wire: TagDto,
//!     mapper: TagMapper,
//!     table: "tags",
//!     unique: [label],
//!     {
//!         #[validate(required(message = "Label is required"))]
//!         label: String,
//!     }
//! );
//!
//! impl WireShape for TagDto {}
//!
//! pub struct TagEntity;
//!
//! impl EntityKind for TagEntity {
//!     type Record = TagRecord;
//!     type Wire = TagDto;
//!     type Mapper = TagMapper;
//!     const TYPE_NAME: &'static str = "tag";
//!     const ROUTE: &'static str = "tag";
//!     const DISPLAY_NAME: &'static str = "Tag";
//! }
//!
//! ServerBuilder::new(config).register_in_memory::<TagEntity>();
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod logging;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        BusinessRules, CacheStats, CachedService, Converter, CrudService, EntityKind,
        EntityService, ErrorKind, NoRules, Page, PageParams, PageRequest, PaginationMeta, Record,
        RecordId, RecordStore, ServiceError, ServiceResult, StoreError, WireShape,
    };

    // === Macros ===
    pub use crate::impl_crud_entity;

    // === Entities ===
    pub use crate::entities::*;

    // === Storage ===
    pub use crate::storage::InMemoryRecordStore;

    // === Config ===
    pub use crate::config::{AppConfig, CacheConfig, StatusFilter};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    pub use axum::Router;
}
