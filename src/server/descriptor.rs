//! Route descriptor for one entity kind

use super::entity_registry::EntityDescriptor;
use super::handlers::{self, CrudState};
use crate::core::entity::EntityKind;
use axum::{Router, routing::get};

/// Builds the uniform route set of an entity kind under `/api/{route}`
///
/// | Method | Path                  |
/// |--------|-----------------------|
/// | GET    | `/`                   |
/// | POST   | `/`                   |
/// | GET    | `/paginated`          |
/// | GET    | `/{id}`               |
/// | PUT    | `/{id}`               |
/// | DELETE | `/{id}`               |
/// | GET    | `/status/{status}`    |
/// | GET    | `/health`             |
pub struct CrudDescriptor<E: EntityKind> {
    state: CrudState<E>,
}

impl<E: EntityKind> CrudDescriptor<E> {
    pub fn new(state: CrudState<E>) -> Self {
        Self { state }
    }
}

impl<E: EntityKind> EntityDescriptor for CrudDescriptor<E> {
    fn entity_type(&self) -> &str {
        E::TYPE_NAME
    }

    fn base_path(&self) -> String {
        E::base_path()
    }

    fn build_routes(&self) -> Router {
        let base = E::base_path();

        Router::new()
            .route(&base, get(handlers::list::<E>).post(handlers::create::<E>))
            .route(&format!("{base}/paginated"), get(handlers::paginated::<E>))
            .route(&format!("{base}/health"), get(handlers::health::<E>))
            .route(
                &format!("{base}/status/{{status}}"),
                get(handlers::by_status::<E>),
            )
            .route(
                &format!("{base}/{{id}}"),
                get(handlers::get_one::<E>)
                    .put(handlers::update::<E>)
                    .delete(handlers::delete::<E>),
            )
            .with_state(self.state.clone())
    }
}
