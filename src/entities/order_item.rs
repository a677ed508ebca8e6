//! Order line items
//!
//! Flat table: the owning order is not referenced.

use crate::core::entity::EntityKind;
use crate::core::validation::WireShape;
use crate::impl_crud_entity;

impl_crud_entity!(
    record: OrderItemRecord,
    wire: OrderItemDto,
    mapper: OrderItemMapper,
    table: "order_items",
    unique: [],
    {
        #[validate(
            required(message = "Quantity is required"),
            range(min = 0, message = "Quantity must be greater than or equal to 0")
        )]
        quantity: i32,
        unit_price: f64,
        subtotal: f64,
    }
);

impl WireShape for OrderItemDto {}

pub struct OrderItemEntity;

impl EntityKind for OrderItemEntity {
    type Record = OrderItemRecord;
    type Wire = OrderItemDto;
    type Mapper = OrderItemMapper;

    const TYPE_NAME: &'static str = "order_item";
    const ROUTE: &'static str = "order-item";
    const DISPLAY_NAME: &'static str = "OrderItem";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validate;

    #[test]
    fn test_quantity_rules() {
        let mut item = OrderItemDto {
            quantity: Some(0),
            ..OrderItemDto::default()
        };
        assert!(validate("order_item", Some(&item)).is_ok());

        item.quantity = Some(-2);
        assert!(validate("order_item", Some(&item)).is_err());

        item.quantity = None;
        assert!(validate("order_item", Some(&item)).is_err());
    }

    #[test]
    fn test_route_is_kebab_case() {
        assert_eq!(OrderItemEntity::base_path(), "/api/order-item");
        assert!(!OrderItemEntity::has_status_field());
    }
}
