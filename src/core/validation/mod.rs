//! Wire-shape validation
//!
//! Field rules (required, not blank, max length, minimum) are declared on
//! each wire struct through the `validator` derive. Rules that need more
//! than one annotation, such as the user email format, live in
//! [`WireShape::format_violations`]. [`validate`] runs both and reports
//! every violation at once.

pub mod validators;

use crate::core::error::{FieldViolation, ServiceError, ServiceResult};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;
use validator::{Validate, ValidationErrors};

/// Transfer form of an entity, used for request and response bodies.
///
/// Wire shapes compare structurally over every field.
pub trait WireShape:
    Validate + Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Entity-specific format rules beyond the declared field rules
    fn format_violations(&self) -> Vec<FieldViolation> {
        Vec::new()
    }
}

/// Reject an absent wire shape or one that breaks any rule
pub fn validate<'a, W: WireShape>(entity_type: &str, wire: Option<&'a W>) -> ServiceResult<&'a W> {
    let Some(wire) = wire else {
        return Err(ServiceError::invalid(
            entity_type,
            "body",
            format!("{entity_type} payload cannot be null"),
        ));
    };

    tracing::debug!(entity_type, payload = ?wire, "validating payload");

    let mut violations = match wire.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => field_violations(&errors),
    };
    violations.extend(wire.format_violations());

    if violations.is_empty() {
        Ok(wire)
    } else {
        Err(ServiceError::InvalidInput {
            entity_type: entity_type.to_string(),
            violations,
        })
    }
}

/// Flatten `validator` errors into sorted `(field, message)` pairs
pub fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                FieldViolation::new(field.to_string(), message)
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    violations
}
