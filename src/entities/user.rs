//! User accounts
//!
//! `email` and `username` are unique columns; the store rejects a second
//! record holding the same value.

use crate::core::entity::{EntityKind, matches_active_flag};
use crate::core::error::FieldViolation;
use crate::core::validation::WireShape;
use crate::core::validation::validators::{is_email_format, not_blank};
use crate::impl_crud_entity;

impl_crud_entity!(
    record: UserRecord,
    wire: UserDto,
    mapper: UserMapper,
    table: "users",
    unique: [email, username],
    {
        #[validate(
            required(message = "Email is required"),
            custom(function = "not_blank", message = "Email is required"),
            length(max = 255, message = "Email must not exceed 255 characters")
        )]
        email: String,
        #[validate(
            required(message = "Username is required"),
            custom(function = "not_blank", message = "Username is required"),
            length(max = 255, message = "Username must not exceed 255 characters")
        )]
        username: String,
        #[validate(
            required(message = "Password is required"),
            custom(function = "not_blank", message = "Password is required"),
            length(max = 255, message = "Password must not exceed 255 characters")
        )]
        password: String,
        #[validate(
            required(message = "FirstName is required"),
            custom(function = "not_blank", message = "FirstName is required"),
            length(max = 255, message = "FirstName must not exceed 255 characters")
        )]
        first_name: String,
        #[validate(
            required(message = "LastName is required"),
            custom(function = "not_blank", message = "LastName is required"),
            length(max = 255, message = "LastName must not exceed 255 characters")
        )]
        last_name: String,
        #[validate(
            required(message = "Phone is required"),
            custom(function = "not_blank", message = "Phone is required"),
            length(max = 255, message = "Phone must not exceed 255 characters")
        )]
        phone: String,
        #[validate(required(message = "Active is required"))]
        active: bool,
    }
);

impl WireShape for UserDto {
    /// Presence is a separate rule, so an absent or blank email is skipped here
    fn format_violations(&self) -> Vec<FieldViolation> {
        match self.email.as_deref() {
            Some(email) if !email.trim().is_empty() && !is_email_format(email) => {
                vec![FieldViolation::new("email", "Invalid email format")]
            }
            _ => Vec::new(),
        }
    }
}

pub struct UserEntity;

impl EntityKind for UserEntity {
    type Record = UserRecord;
    type Wire = UserDto;
    type Mapper = UserMapper;

    const TYPE_NAME: &'static str = "user";
    const ROUTE: &'static str = "user";
    const DISPLAY_NAME: &'static str = "User";

    fn has_status_field() -> bool {
        true
    }

    fn matches_status(record: &UserRecord, status: &str) -> bool {
        matches_active_flag(record.active, status)
    }
}
