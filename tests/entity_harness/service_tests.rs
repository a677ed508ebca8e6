//! Macro-generated contract suite for `CrudService<E>` implementations.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod entity_harness;
//!
//! use entity_harness::*;
//!
//! crud_service_tests!(
//!     product_service,
//!     ProductEntity,
//!     in_memory_service::<ProductEntity>(),
//!     product,
//!     change_product,
//!     break_product
//! );
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_save_then_find_round_trip`: saved shape carries an id and reads back equal
//! - `test_update_is_visible`: update then find reflects the new fields
//! - `test_delete_then_absent`: delete then exists is false and find is None
//! - `test_find_missing_is_none`: unknown id is a normal `None`
//! - `test_find_all_in_id_order`: list returns every record, oldest first
//! - `test_paginated_window`: page 1 of size 2 over 5 records
//!
//! ## Errors
//! - `test_update_missing_is_not_found`
//! - `test_delete_missing_is_not_found`
//! - `test_save_null_is_invalid`
//! - `test_save_rule_breaking_is_invalid`: nothing is stored
//! - `test_update_rule_breaking_is_invalid`: stored record is unchanged
//!
//! ## Semantics
//! - `test_wire_and_record_equality`: structural vs identity equality
//! - `test_status_lookup_passthrough`: every record regardless of status
//! - `test_concurrent_saves`: parallel saves get distinct ids

/// Generate the contract suite for one entity kind.
///
/// `$factory` must evaluate to an `Arc<dyn CrudService<$kind>>` and is
/// re-evaluated for each test. `$sample(n)` builds the n-th valid wire
/// shape (distinct for distinct n), `$change` mutates a valid shape into
/// another valid one and `$invalid` breaks a field rule.
#[macro_export]
macro_rules! crud_service_tests {
    ($name:ident, $kind:ty, $factory:expr, $sample:path, $change:path, $invalid:path) => {
        mod $name {
            use super::*;
            use shopfront::core::converter::Converter;
            use shopfront::core::entity::EntityKind;
            use shopfront::core::error::ErrorKind;
            use shopfront::core::query::PageRequest;
            use shopfront::core::service::CrudService;
            use std::sync::Arc;

            type Wire = <$kind as EntityKind>::Wire;
            type Mapper = <$kind as EntityKind>::Mapper;

            fn service() -> Arc<dyn CrudService<$kind>> {
                $factory
            }

            fn with_id(mut wire: Wire, id: Option<u64>) -> Wire {
                wire.id = id;
                wire
            }

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_save_then_find_round_trip() {
                let service = service();
                let saved = service.save(Some($sample(1))).await.unwrap();
                assert!(saved.id.is_some(), "saved shape must carry an id");
                assert_eq!(saved, with_id($sample(1), saved.id));

                let found = service.find_by_id(saved.id.unwrap()).await.unwrap();
                assert_eq!(found, Some(saved));
            }

            #[tokio::test]
            async fn test_update_is_visible() {
                let service = service();
                let saved = service.save(Some($sample(1))).await.unwrap();
                let id = saved.id.unwrap();

                let mut changed = $sample(1);
                $change(&mut changed);
                let updated = service.update(id, Some(changed.clone())).await.unwrap();
                assert_eq!(updated, with_id(changed, Some(id)));

                let found = service.find_by_id(id).await.unwrap();
                assert_eq!(found, Some(updated));
            }

            #[tokio::test]
            async fn test_delete_then_absent() {
                let service = service();
                let saved = service.save(Some($sample(1))).await.unwrap();
                let id = saved.id.unwrap();

                service.delete_by_id(id).await.unwrap();
                assert!(!service.exists_by_id(id).await.unwrap());
                assert!(service.find_by_id(id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_find_missing_is_none() {
                let service = service();
                assert!(service.find_by_id(404).await.unwrap().is_none());
                assert!(!service.exists_by_id(404).await.unwrap());
            }

            #[tokio::test]
            async fn test_find_all_in_id_order() {
                let service = service();
                assert!(service.find_all().await.unwrap().is_empty());

                let mut ids = Vec::new();
                for n in 1..=3 {
                    ids.push(service.save(Some($sample(n))).await.unwrap().id);
                }

                let listed: Vec<_> = service
                    .find_all()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|w| w.id)
                    .collect();
                assert_eq!(listed, ids);
            }

            #[tokio::test]
            async fn test_paginated_window() {
                let service = service();
                for n in 1..=5 {
                    service.save(Some($sample(n))).await.unwrap();
                }

                let page = service
                    .find_all_paginated(PageRequest::new(1, 2))
                    .await
                    .unwrap();
                assert_eq!(page.data.len(), 2);
                assert_eq!(page.data[0], with_id($sample(3), Some(3)));
                assert_eq!(page.pagination.total, 5);
                assert_eq!(page.pagination.total_pages, 3);
                assert!(page.pagination.has_next);
                assert!(page.pagination.has_prev);
            }

            // ==================================================================
            // Errors
            // ==================================================================

            #[tokio::test]
            async fn test_update_missing_is_not_found() {
                let err = service().update(99, Some($sample(1))).await.unwrap_err();
                assert_eq!(err.kind(), ErrorKind::NotFound);
            }

            #[tokio::test]
            async fn test_delete_missing_is_not_found() {
                let err = service().delete_by_id(99).await.unwrap_err();
                assert_eq!(err.kind(), ErrorKind::NotFound);
            }

            #[tokio::test]
            async fn test_save_null_is_invalid() {
                let err = service().save(None).await.unwrap_err();
                assert_eq!(err.kind(), ErrorKind::InvalidInput);
            }

            #[tokio::test]
            async fn test_save_rule_breaking_is_invalid() {
                let service = service();
                let mut broken = $sample(1);
                $invalid(&mut broken);

                let err = service.save(Some(broken)).await.unwrap_err();
                assert_eq!(err.kind(), ErrorKind::InvalidInput);
                assert!(service.find_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_update_rule_breaking_is_invalid() {
                let service = service();
                let saved = service.save(Some($sample(1))).await.unwrap();
                let id = saved.id.unwrap();

                let mut broken = $sample(1);
                $invalid(&mut broken);
                let err = service.update(id, Some(broken)).await.unwrap_err();
                assert_eq!(err.kind(), ErrorKind::InvalidInput);

                assert_eq!(service.find_by_id(id).await.unwrap(), Some(saved));
            }

            // ==================================================================
            // Semantics
            // ==================================================================

            #[test]
            fn test_wire_and_record_equality() {
                assert_eq!($sample(1), $sample(1));

                let left = Mapper::to_record(&$sample(1));
                let right = Mapper::to_record(&$sample(1));
                assert_ne!(left, right, "unsaved records are never equal");
            }

            #[tokio::test]
            async fn test_status_lookup_passthrough() {
                let service = service();
                for n in 1..=3 {
                    service.save(Some($sample(n))).await.unwrap();
                }

                let by_status = service.find_by_status("PENDING").await.unwrap();
                assert_eq!(by_status, service.find_all().await.unwrap());
            }

            #[tokio::test]
            async fn test_concurrent_saves() {
                let service = service();
                let handles: Vec<_> = (1..=8)
                    .map(|n| {
                        let service = service.clone();
                        tokio::spawn(async move { service.save(Some($sample(n))).await })
                    })
                    .collect();

                let mut ids = Vec::new();
                for handle in handles {
                    let saved = tokio::time::timeout(std::time::Duration::from_secs(30), handle)
                        .await
                        .expect("concurrent save timed out")
                        .unwrap()
                        .unwrap();
                    ids.push(saved.id.unwrap());
                }

                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), 8, "every save must get its own id");
                assert_eq!(service.find_all().await.unwrap().len(), 8);
            }
        }
    };
}
