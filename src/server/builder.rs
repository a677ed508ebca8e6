//! ServerBuilder for fluent API to build HTTP servers

use super::descriptor::CrudDescriptor;
use super::entity_registry::EntityRegistry;
use super::handlers::CrudState;
use crate::config::{AppConfig, CorsConfig};
use crate::core::cache::CachedService;
use crate::core::entity::EntityKind;
use crate::core::service::{CrudService, EntityService};
use crate::entities::{
    CategoryEntity, OrderEntity, OrderItemEntity, ProductEntity, ReviewEntity, UserEntity,
};
use crate::storage::InMemoryRecordStore;
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for the HTTP application
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new(config)
///     .register_catalog()
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    entity_registry: EntityRegistry,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            entity_registry: EntityRegistry::new(),
            custom_routes: Vec::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Serve an entity kind through the given service
    ///
    /// The service is wrapped in a read-through cache when `cache.enabled`.
    pub fn register_service<E: EntityKind>(mut self, service: impl CrudService<E> + 'static) -> Self {
        let mut service: Arc<dyn CrudService<E>> = Arc::new(service);
        if self.config.cache.enabled {
            service = Arc::new(CachedService::new(service, &self.config.cache));
        }

        let state = CrudState {
            service,
            pagination: self.config.pagination.clone(),
            detailed_errors: self.config.server.detailed_errors,
        };
        self.entity_registry
            .register(Box::new(CrudDescriptor::<E>::new(state)));
        self
    }

    /// Serve an entity kind backed by a fresh in-memory store
    pub fn register_in_memory<E: EntityKind>(self) -> Self {
        let store = Arc::new(InMemoryRecordStore::<E::Record>::new());
        let service =
            EntityService::<E>::new(store).with_status_filter(self.config.status_filter);
        self.register_service(service)
    }

    /// Register all six shop entity kinds with in-memory stores
    pub fn register_catalog(self) -> Self {
        self.register_in_memory::<UserEntity>()
            .register_in_memory::<ProductEntity>()
            .register_in_memory::<CategoryEntity>()
            .register_in_memory::<OrderEntity>()
            .register_in_memory::<OrderItemEntity>()
            .register_in_memory::<ReviewEntity>()
    }

    /// Add routes outside the entity pattern
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router with health, entity and custom routes
    pub fn build(self) -> Result<Router> {
        let cors = cors_layer(&self.config.cors)?;

        let mut app = health_routes().merge(self.entity_registry.build_routes());
        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(cors).layer(TraceLayer::new_for_http()))
    }

    /// Serve on `server.bind` until Ctrl+C or SIGTERM
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.socket_addr()?;
        let app = self.build()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "shopfront"
    }))
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty_router() {
        assert!(ServerBuilder::new(AppConfig::default()).build().is_ok());
    }

    #[test]
    fn test_register_catalog_builds() {
        assert!(
            ServerBuilder::new(AppConfig::default())
                .register_catalog()
                .build()
                .is_ok()
        );
    }

    #[test]
    fn test_cors_origins() {
        let explicit = CorsConfig {
            allowed_origins: vec!["https://shop.example.com".to_string()],
        };
        assert!(cors_layer(&explicit).is_ok());

        let broken = CorsConfig {
            allowed_origins: vec!["bad\norigin".to_string()],
        };
        assert!(cors_layer(&broken).is_err());
    }
}
