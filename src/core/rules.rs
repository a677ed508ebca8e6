//! Extension point for per-entity business rules
//!
//! Services call these hooks after validation and before touching the
//! store. No entity ships a rule yet, so every kind runs with [`NoRules`].

use crate::core::entity::EntityKind;
use crate::core::error::ServiceResult;
use crate::core::record::RecordId;

/// Domain rules for one entity kind; any hook may veto the operation
pub trait BusinessRules<E: EntityKind>: Send + Sync {
    fn before_save(&self, _wire: &E::Wire) -> ServiceResult<()> {
        Ok(())
    }

    fn before_update(&self, _existing: &E::Record, _wire: &E::Wire) -> ServiceResult<()> {
        Ok(())
    }

    fn before_delete(&self, _id: RecordId) -> ServiceResult<()> {
        Ok(())
    }
}

/// Accepts every operation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRules;

impl<E: EntityKind> BusinessRules<E> for NoRules {}
