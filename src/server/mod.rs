//! HTTP server: per-kind route groups, generic handlers and the builder
//!
//! Every registered entity kind gets the same route set under
//! `/api/{route}`; the builder adds `/health` and `/healthz`, CORS and
//! request tracing.

pub mod builder;
pub mod descriptor;
pub mod entity_registry;
pub mod handlers;

pub use builder::ServerBuilder;
pub use descriptor::CrudDescriptor;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use handlers::CrudState;
