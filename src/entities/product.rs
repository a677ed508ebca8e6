//! Catalog products

use crate::core::entity::{EntityKind, matches_active_flag};
use crate::core::validation::WireShape;
use crate::core::validation::validators::not_blank;
use crate::impl_crud_entity;

impl_crud_entity!(
    record: ProductRecord,
    wire: ProductDto,
    mapper: ProductMapper,
    table: "products",
    unique: [],
    {
        #[validate(
            required(message = "Name is required"),
            custom(function = "not_blank", message = "Name is required"),
            length(max = 255, message = "Name must not exceed 255 characters")
        )]
        name: String,
        #[validate(
            required(message = "Description is required"),
            custom(function = "not_blank", message = "Description is required"),
            length(max = 255, message = "Description must not exceed 255 characters")
        )]
        description: String,
        price: f64,
        #[validate(
            required(message = "Stock is required"),
            range(min = 0, message = "Stock must be greater than or equal to 0")
        )]
        stock: i32,
        #[validate(
            required(message = "Sku is required"),
            custom(function = "not_blank", message = "Sku is required"),
            length(max = 255, message = "Sku must not exceed 255 characters")
        )]
        sku: String,
        #[validate(required(message = "Active is required"))]
        active: bool,
    }
);

impl WireShape for ProductDto {}

pub struct ProductEntity;

impl EntityKind for ProductEntity {
    type Record = ProductRecord;
    type Wire = ProductDto;
    type Mapper = ProductMapper;

    const TYPE_NAME: &'static str = "product";
    const ROUTE: &'static str = "product";
    const DISPLAY_NAME: &'static str = "Product";

    fn has_status_field() -> bool {
        true
    }

    fn matches_status(record: &ProductRecord, status: &str) -> bool {
        matches_active_flag(record.active, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::Converter;
    use crate::core::error::{FieldViolation, ServiceError};
    use crate::core::validation::validate;

    fn lamp() -> ProductDto {
        ProductDto {
            id: None,
            name: Some("Lamp".to_string()),
            description: Some("Desk lamp".to_string()),
            price: Some(24.5),
            stock: Some(0),
            sku: Some("LMP-01".to_string()),
            active: Some(true),
        }
    }

    #[test]
    fn test_zero_stock_is_valid() {
        assert!(validate("product", Some(&lamp())).is_ok());
    }

    #[test]
    fn test_negative_stock_rejected() {
        let mut product = lamp();
        product.stock = Some(-1);
        match validate("product", Some(&product)).unwrap_err() {
            ServiceError::InvalidInput { violations, .. } => assert_eq!(
                violations,
                vec![FieldViolation::new(
                    "stock",
                    "Stock must be greater than or equal to 0"
                )]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_price_is_optional() {
        let mut product = lamp();
        product.price = None;
        assert!(validate("product", Some(&product)).is_ok());
    }

    #[test]
    fn test_sku_too_long() {
        let mut product = lamp();
        product.sku = Some("X".repeat(256));
        assert!(validate("product", Some(&product)).is_err());
        product.sku = Some("X".repeat(255));
        assert!(validate("product", Some(&product)).is_ok());
    }

    #[test]
    fn test_round_trip_keeps_fields() {
        let mut record = ProductMapper::to_record(&lamp());
        record.id = Some(4);
        let wire = ProductMapper::to_wire(&record);
        assert_eq!(wire.id, Some(4));

        let mut expected = lamp();
        expected.id = Some(4);
        assert_eq!(wire, expected);
    }

    #[test]
    fn test_records_compare_by_identity() {
        let unsaved = ProductMapper::to_record(&lamp());
        assert_ne!(unsaved, unsaved.clone());

        let mut left = unsaved.clone();
        left.id = Some(1);
        let mut right = ProductMapper::to_record(&lamp());
        right.id = Some(1);
        right.name = Some("Other".to_string());
        assert_eq!(left, right);
    }
}
