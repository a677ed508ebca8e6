//! Product categories

use crate::core::entity::{EntityKind, matches_active_flag};
use crate::core::validation::WireShape;
use crate::core::validation::validators::not_blank;
use crate::impl_crud_entity;

impl_crud_entity!(
    record: CategoryRecord,
    wire: CategoryDto,
    mapper: CategoryMapper,
    table: "categories",
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
        #[validate(required(message = "Active is required"))]
        active: bool,
    }
);

impl WireShape for CategoryDto {}

pub struct CategoryEntity;

impl EntityKind for CategoryEntity {
    type Record = CategoryRecord;
    type Wire = CategoryDto;
    type Mapper = CategoryMapper;

    const TYPE_NAME: &'static str = "category";
    const ROUTE: &'static str = "category";
    const DISPLAY_NAME: &'static str = "Category";

    fn has_status_field() -> bool {
        true
    }

    fn matches_status(record: &CategoryRecord, status: &str) -> bool {
        matches_active_flag(record.active, status)
    }
}
