//! Shared test harness for entity services
//!
//! Provides one fixture family per entity kind (a numbered sample, a field
//! change and a rule-breaking mutation) plus service factories.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod entity_harness;
//! use entity_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod service_tests;

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use shopfront::config::{CacheConfig, StatusFilter};
use shopfront::core::cache::CachedService;
use shopfront::core::entity::EntityKind;
use shopfront::core::service::{CrudService, EntityService};
use shopfront::entities::*;
use shopfront::storage::InMemoryRecordStore;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Service factories
// ---------------------------------------------------------------------------

/// Store-backed service over an empty in-memory store
pub fn in_memory_service<E: EntityKind>() -> Arc<dyn CrudService<E>> {
    Arc::new(EntityService::<E>::new(Arc::new(
        InMemoryRecordStore::<E::Record>::new(),
    )))
}

/// Same as [`in_memory_service`] but filtering `find_by_status` on the field
pub fn field_filtered_service<E: EntityKind>() -> Arc<dyn CrudService<E>> {
    Arc::new(
        EntityService::<E>::new(Arc::new(InMemoryRecordStore::<E::Record>::new()))
            .with_status_filter(StatusFilter::Field),
    )
}

/// In-memory service behind the read-through cache
pub fn cached_service<E: EntityKind>() -> Arc<dyn CrudService<E>> {
    let config = CacheConfig {
        enabled: true,
        capacity: 16,
        ttl_secs: None,
    };
    Arc::new(CachedService::new(in_memory_service::<E>(), &config))
}

fn timestamp(day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 1, day.clamp(1, 28)).and_then(|d| d.and_hms_opt(9, 30, 0))
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

pub fn user(n: usize) -> UserDto {
    UserDto {
        id: None,
        email: Some(format!("user{n}@shop.test")),
        username: Some(format!("user{n}")),
        password: Some("s3cret".to_string()),
        first_name: Some(format!("First{n}")),
        last_name: Some("Tester".to_string()),
        phone: Some(format!("555-01{n:02}")),
        active: Some(true),
    }
}

pub fn change_user(wire: &mut UserDto) {
    wire.first_name = Some("Renamed".to_string());
    wire.active = Some(false);
}

pub fn break_user(wire: &mut UserDto) {
    wire.email = Some("not-an-email".to_string());
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

pub fn product(n: usize) -> ProductDto {
    ProductDto {
        id: None,
        name: Some(format!("Widget {n}")),
        description: Some("A widget".to_string()),
        price: Some(9.99 + n as f64),
        stock: Some(10),
        sku: Some(format!("WID-{n}")),
        active: Some(true),
    }
}

pub fn change_product(wire: &mut ProductDto) {
    wire.stock = Some(0);
    wire.price = Some(1.5);
}

pub fn break_product(wire: &mut ProductDto) {
    wire.stock = Some(-1);
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

pub fn category(n: usize) -> CategoryDto {
    CategoryDto {
        id: None,
        name: Some(format!("Category {n}")),
        description: Some("Things".to_string()),
        active: Some(true),
    }
}

pub fn change_category(wire: &mut CategoryDto) {
    wire.description = Some("Other things".to_string());
}

pub fn break_category(wire: &mut CategoryDto) {
    wire.name = Some("   ".to_string());
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

pub fn order(n: usize) -> OrderDto {
    OrderDto {
        id: None,
        order_number: Some(format!("ORD-{n:04}")),
        order_date: timestamp(n as u32),
        status: Some("PENDING".to_string()),
        total: Some(42.0),
        shipping_address: Some("1 Main St".to_string()),
    }
}

pub fn change_order(wire: &mut OrderDto) {
    wire.status = Some("SHIPPED".to_string());
}

pub fn break_order(wire: &mut OrderDto) {
    wire.order_number = None;
}

// ---------------------------------------------------------------------------
// OrderItem
// ---------------------------------------------------------------------------

pub fn order_item(n: usize) -> OrderItemDto {
    OrderItemDto {
        id: None,
        quantity: Some(n as i32 + 1),
        unit_price: Some(2.5),
        subtotal: Some(2.5 * (n as f64 + 1.0)),
    }
}

pub fn change_order_item(wire: &mut OrderItemDto) {
    wire.quantity = Some(7);
    wire.subtotal = Some(17.5);
}

pub fn break_order_item(wire: &mut OrderItemDto) {
    wire.quantity = None;
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

pub fn review(n: usize) -> ReviewDto {
    ReviewDto {
        id: None,
        rating: Some((n % 6) as i32),
        comment: Some(format!("Review number {n}")),
        review_date: timestamp(n as u32),
    }
}

pub fn change_review(wire: &mut ReviewDto) {
    wire.comment = Some("Changed my mind".to_string());
}

pub fn break_review(wire: &mut ReviewDto) {
    wire.rating = Some(-3);
}
