//! Product reviews

use crate::core::entity::EntityKind;
use crate::core::validation::WireShape;
use crate::core::validation::validators::not_blank;
use crate::impl_crud_entity;
use chrono::NaiveDateTime;

impl_crud_entity!(
    record: ReviewRecord,
    wire: ReviewDto,
    mapper: ReviewMapper,
    table: "reviews",
    unique: [],
    {
        #[validate(
            required(message = "Rating is required"),
            range(min = 0, message = "Rating must be greater than or equal to 0")
        )]
        rating: i32,
        #[validate(
            required(message = "Comment is required"),
            custom(function = "not_blank", message = "Comment is required"),
            length(max = 255, message = "Comment must not exceed 255 characters")
        )]
        comment: String,
        review_date: NaiveDateTime,
    }
);

impl WireShape for ReviewDto {}

pub struct ReviewEntity;

impl EntityKind for ReviewEntity {
    type Record = ReviewRecord;
    type Wire = ReviewDto;
    type Mapper = ReviewMapper;

    const TYPE_NAME: &'static str = "review";
    const ROUTE: &'static str = "review";
    const DISPLAY_NAME: &'static str = "Review";
}
