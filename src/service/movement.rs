//! Movement engine: validated, atomic unit transitions.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, TransactionTrait};

use crate::{
    catalog,
    error::AppError,
    model::{movement::MoveUnitParams, unit::Unit},
    state::UnitLocks,
};

/// Executes unit transitions.
///
/// Contract for `move_unit`:
/// 1. at most one in-flight move per unit id (per-unit lock);
/// 2. the destination (department, section) pair must be a catalog member;
/// 3. the unit-state update and the ledger append commit together or not at
///    all, with the old pair recorded as `from_*`;
/// 4. `last_movement_time` advances monotonically, never rewound.
///
/// Storage failures roll the transaction back and surface to the caller
/// unretried; retry policy belongs to the caller.
pub struct MovementService<'a> {
    db: &'a DatabaseConnection,
    locks: UnitLocks,
}

impl<'a> MovementService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: UnitLocks) -> Self {
        Self { db, locks }
    }

    /// Moves a unit to the target (department, section) pair and appends the
    /// audit record, as one transaction.
    ///
    /// # Returns
    /// - `Ok(Unit)` - The unit in its new state
    /// - `Err(AppError::NotFound)` - No unit with that id
    /// - `Err(AppError::InvalidTransition)` - Target section does not belong
    ///   to the target department
    /// - `Err(AppError::DbErr)` - Storage failure, fully rolled back
    pub async fn move_unit(&self, params: MoveUnitParams) -> Result<Unit, AppError> {
        if !catalog::is_valid_section(params.target_department, params.target_section) {
            return Err(AppError::InvalidTransition {
                department: params.target_department,
                section: params.target_section,
            });
        }

        let _guard = self.locks.lock(&params.unit_id).await;

        let txn = self.db.begin().await?;

        let old = entity::prelude::Unit::find_by_id(&params.unit_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Unit '{}' not found", params.unit_id)))?;
        let old = Unit::from_entity(old)?;

        // Never rewind the per-unit clock, even if the wall clock does.
        let timestamp = Utc::now().max(old.last_movement_time);

        let updated = entity::unit::ActiveModel {
            id: ActiveValue::Unchanged(old.id.clone()),
            current_department: ActiveValue::Set(params.target_department.as_str().to_string()),
            current_section: ActiveValue::Set(params.target_section.as_str().to_string()),
            last_movement_time: ActiveValue::Set(timestamp),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        entity::movement::ActiveModel {
            unit_id: ActiveValue::Set(old.id.clone()),
            employee_id: ActiveValue::Set(params.employee_id),
            movement_type: ActiveValue::Set(params.movement_type),
            from_department: ActiveValue::Set(old.current_department.as_str().to_string()),
            to_department: ActiveValue::Set(params.target_department.as_str().to_string()),
            from_section: ActiveValue::Set(old.current_section.as_str().to_string()),
            to_section: ActiveValue::Set(params.target_section.as_str().to_string()),
            notes: ActiveValue::Set(params.notes.unwrap_or_default()),
            timestamp: ActiveValue::Set(timestamp),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::debug!(
            unit_id = %old.id,
            from = %old.current_section,
            to = %params.target_section,
            "unit moved"
        );

        Unit::from_entity(updated)
    }
}
