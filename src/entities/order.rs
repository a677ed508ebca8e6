//! Customer orders
//!
//! `status` is free text. Lookups by status compare it case-insensitively.

use crate::core::entity::EntityKind;
use crate::core::validation::WireShape;
use crate::core::validation::validators::not_blank;
use crate::impl_crud_entity;
use chrono::NaiveDateTime;

impl_crud_entity!(
    record: OrderRecord,
    wire: OrderDto,
    mapper: OrderMapper,
    table: "orders",
    unique: [],
    {
        #[validate(
            required(message = "OrderNumber is required"),
            custom(function = "not_blank", message = "OrderNumber is required"),
            length(max = 255, message = "OrderNumber must not exceed 255 characters")
        )]
        order_number: String,
        order_date: NaiveDateTime,
        #[validate(
            required(message = "Status is required"),
            custom(function = "not_blank", message = "Status is required"),
            length(max = 255, message = "Status must not exceed 255 characters")
        )]
        status: String,
        total: f64,
        #[validate(
            required(message = "ShippingAddress is required"),
            custom(function = "not_blank", message = "ShippingAddress is required"),
            length(max = 255, message = "ShippingAddress must not exceed 255 characters")
        )]
        shipping_address: String,
    }
);

impl WireShape for OrderDto {}

pub struct OrderEntity;

impl EntityKind for OrderEntity {
    type Record = OrderRecord;
    type Wire = OrderDto;
    type Mapper = OrderMapper;

    const TYPE_NAME: &'static str = "order";
    const ROUTE: &'static str = "order";
    const DISPLAY_NAME: &'static str = "Order";

    fn has_status_field() -> bool {
        true
    }

    fn matches_status(record: &OrderRecord, status: &str) -> bool {
        record
            .status
            .as_deref()
            .is_some_and(|current| current.trim().eq_ignore_ascii_case(status.trim()))
    }
}
