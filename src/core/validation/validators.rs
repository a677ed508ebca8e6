//! Reusable field validators
//!
//! Used from `#[validate(custom(...))]` attributes and format rules.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::ValidationError;

/// Simple `local@domain` shape accepted for user emails
static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@(.+)$").expect("email pattern is a valid regex")
});

/// Validator: string must contain at least one non-whitespace character
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        Err(error)
    } else {
        Ok(())
    }
}

/// Check the email format rule
pub fn is_email_format(value: &str) -> bool {
    EMAIL_FORMAT.is_match(value)
}
