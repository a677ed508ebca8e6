//! Typed error handling for the CRUD pipeline
//!
//! The service layer is the only place errors are raised. Every error falls
//! into one of three [`ErrorKind`]s, and the REST layer only classifies them
//! into status codes:
//!
//! - [`ErrorKind::InvalidInput`] → 400
//! - [`ErrorKind::NotFound`] → 404
//! - [`ErrorKind::Unexpected`] → 500
//!
//! # Example
//!
//! ```rust,ignore
//! match service.update(42, Some(dto)).await {
//!     Ok(updated) => println!("updated {:?}", updated),
//!     Err(ServiceError::NotFound { id, .. }) => println!("no record {}", id),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use crate::core::record::RecordId;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error taxonomy shared by every entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-supplied data is absent or breaks a field rule
    InvalidInput,
    /// The referenced identifier does not exist
    NotFound,
    /// Store failure or anything else the caller cannot fix
    Unexpected,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors raised by a record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store's lock was poisoned by a panicking writer
    #[error("{table} store lock poisoned: {message}")]
    LockPoisoned { table: String, message: String },

    /// A unique column already holds this value
    #[error("{table}.{field} must be unique, '{value}' is already taken")]
    UniqueViolation {
        table: String,
        field: String,
        value: String,
    },
}

/// Errors surfaced by entity services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid {entity_type}: {}", join_violations(.violations))]
    InvalidInput {
        entity_type: String,
        violations: Vec<FieldViolation>,
    },

    #[error("{entity_type} not found with id: {id}")]
    NotFound { entity_type: String, id: RecordId },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error response body, only sent when detailed errors are enabled
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServiceError {
    /// Shorthand for an input error carrying a single violation
    pub fn invalid(
        entity_type: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ServiceError::InvalidInput {
            entity_type: entity_type.into(),
            violations: vec![FieldViolation::new(field, message)],
        }
    }

    pub fn not_found(entity_type: impl Into<String>, id: RecordId) -> Self {
        ServiceError::NotFound {
            entity_type: entity_type.into(),
            id,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::InvalidInput { .. } => ErrorKind::InvalidInput,
            ServiceError::NotFound { .. } => ErrorKind::NotFound,
            ServiceError::Store(_) | ServiceError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::InvalidInput { .. } => "INVALID_INPUT",
            ServiceError::NotFound { .. } => "NOT_FOUND",
            ServiceError::Store(StoreError::UniqueViolation { .. }) => "UNIQUE_VIOLATION",
            ServiceError::Store(_) => "STORE_ERROR",
            ServiceError::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.client_message(),
            details: self.details(),
        }
    }

    /// Unexpected errors never leak their internals to the caller
    fn client_message(&self) -> String {
        match self.kind() {
            ErrorKind::Unexpected => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ServiceError::InvalidInput { violations, .. } => {
                Some(serde_json::json!({ "fields": violations }))
            }
            ServiceError::NotFound { entity_type, id } => Some(serde_json::json!({
                "entity_type": entity_type,
                "id": id
            })),
            _ => None,
        }
    }

    /// Log the error at a level matching its kind and build the HTTP response
    pub fn into_http_response(self, detailed: bool) -> Response {
        match self.kind() {
            ErrorKind::Unexpected => tracing::error!(error = %self, "request failed"),
            _ => tracing::warn!(error = %self, "request rejected"),
        }

        let status = self.status_code();
        if detailed {
            (status, Json(self.to_response())).into_response()
        } else {
            status.into_response()
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        self.into_http_response(false)
    }
}

/// A specialized Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
