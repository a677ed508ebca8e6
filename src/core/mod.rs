//! Core traits and types shared by every entity kind

pub mod cache;
pub mod converter;
pub mod entity;
pub mod error;
pub mod query;
pub mod record;
pub mod rules;
pub mod service;
pub mod store;
pub mod validation;

pub use cache::{CacheStats, CachedService, ReadThroughCache};
pub use converter::Converter;
pub use entity::{EntityKind, matches_active_flag};
pub use error::{ErrorKind, ErrorResponse, FieldViolation, ServiceError, ServiceResult, StoreError};
pub use query::{Page, PageParams, PageRequest, PaginationMeta};
pub use record::{Record, RecordId, same_identity};
pub use rules::{BusinessRules, NoRules};
pub use service::{CrudService, EntityService};
pub use store::RecordStore;
pub use validation::{WireShape, validate};
