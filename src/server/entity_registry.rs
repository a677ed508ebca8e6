//! Entity registry collecting the route groups of every entity kind

use axum::Router;
use std::collections::BTreeMap;

/// Describes how to build the routes of one entity kind
pub trait EntityDescriptor: Send + Sync {
    /// Singular snake_case name, e.g. "order_item"
    fn entity_type(&self) -> &str;

    /// Route prefix, e.g. "/api/order-item"
    fn base_path(&self) -> String;

    fn build_routes(&self) -> Router;
}

/// Registry of all entity kinds served by the application
///
/// Keyed by entity type; registering a kind twice replaces the first
/// descriptor.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        tracing::debug!(
            entity_type = %entity_type,
            base_path = %descriptor.base_path(),
            "registering entity routes"
        );
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Merge the routes of every registered kind into one router
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered entity types, sorted
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}
