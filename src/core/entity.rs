//! Entity kind trait tying together one instance of the CRUD pipeline
//!
//! Each kind (User, Product, ...) is a zero-sized marker type naming its
//! record, its wire shape and the converter between them, plus the routing
//! metadata the REST layer needs.

use crate::core::converter::Converter;
use crate::core::record::Record;
use crate::core::validation::WireShape;

/// One entity kind served by the generic pipeline.
///
/// Usually implemented next to an `impl_crud_entity!` invocation:
///
/// ```rust,ignore
/// impl EntityKind for ProductEntity {
///     type Record = ProductRecord;
///     type Wire = ProductDto;
///     type Mapper = ProductMapper;
///
///     const TYPE_NAME: &'static str = "product";
///     const ROUTE: &'static str = "product";
///     const DISPLAY_NAME: &'static str = "Product";
/// }
/// ```
pub trait EntityKind: Send + Sync + 'static {
    /// Persisted form
    type Record: Record;

    /// Transfer form
    type Wire: WireShape;

    /// Field copy between the two forms
    type Mapper: Converter<Record = Self::Record, Wire = Self::Wire>;

    /// Singular snake_case name (e.g. "order_item")
    const TYPE_NAME: &'static str;

    /// kebab-case segment under `/api` (e.g. "order-item")
    const ROUTE: &'static str;

    /// Human-readable name (e.g. "OrderItem")
    const DISPLAY_NAME: &'static str;

    /// Route prefix for this kind, e.g. `/api/order-item`
    fn base_path() -> String {
        format!("/api/{}", Self::ROUTE)
    }

    /// Whether the kind has a field `find_by_status` can filter on
    fn has_status_field() -> bool {
        false
    }

    /// Match a record against a status value.
    ///
    /// Kinds without a status field match every record.
    fn matches_status(_record: &Self::Record, _status: &str) -> bool {
        true
    }
}

/// Status matching for kinds whose status is an `active` flag.
///
/// `active`/`true` select active records and `inactive`/`false` inactive
/// ones; any other value selects nothing.
pub fn matches_active_flag(active: Option<bool>, status: &str) -> bool {
    match status.trim().to_ascii_lowercase().as_str() {
        "active" | "true" => active == Some(true),
        "inactive" | "false" => active == Some(false),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_active_flag() {
        assert!(matches_active_flag(Some(true), "ACTIVE"));
        assert!(matches_active_flag(Some(true), "true"));
        assert!(matches_active_flag(Some(false), "inactive"));
        assert!(!matches_active_flag(Some(false), "active"));
        assert!(!matches_active_flag(None, "active"));
        assert!(!matches_active_flag(Some(true), "PENDING"));
    }
}
