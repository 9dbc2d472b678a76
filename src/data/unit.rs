//! Unit store repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder, SqlErr,
};

use crate::{
    catalog::{Department, Section},
    error::AppError,
    model::unit::{CreateUnitParams, Unit},
};

/// Department and section every freshly created unit starts in.
pub const DEFAULT_DEPARTMENT: Department = Department::Operations;
pub const DEFAULT_SECTION: Section = Section::ReadyForLoading;

/// Repository providing database operations for the unit store.
pub struct UnitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a unit in the default `(operations, ready_for_loading)` state
    /// with the current timestamp.
    ///
    /// # Returns
    /// - `Ok(Unit)` - The created unit
    /// - `Err(AppError::Conflict)` - A unit with this id already exists
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn create(&self, params: CreateUnitParams) -> Result<Unit, AppError> {
        let entity = entity::unit::ActiveModel {
            id: ActiveValue::Set(params.id.clone()),
            unit_type: ActiveValue::Set(params.unit_type),
            current_department: ActiveValue::Set(DEFAULT_DEPARTMENT.as_str().to_string()),
            current_section: ActiveValue::Set(DEFAULT_SECTION.as_str().to_string()),
            last_movement_time: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict(format!("Unit id '{}' is already in use", params.id))
            }
            _ => AppError::DbErr(err),
        })?;

        Unit::from_entity(entity)
    }

    /// Gets a unit by id.
    ///
    /// # Returns
    /// - `Ok(Some(Unit))` - Unit found
    /// - `Ok(None)` - No unit with that id
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Unit>, AppError> {
        let entity = entity::prelude::Unit::find_by_id(id).one(self.db).await?;

        entity.map(Unit::from_entity).transpose()
    }

    /// Updates a unit's free-form type label.
    ///
    /// # Returns
    /// - `Ok(Unit)` - The updated unit
    /// - `Err(AppError::NotFound)` - No unit with that id
    pub async fn update_type(&self, id: &str, unit_type: String) -> Result<Unit, AppError> {
        let entity = entity::prelude::Unit::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Unit '{}' not found", id)))?;

        let mut active_model: entity::unit::ActiveModel = entity.into();
        active_model.unit_type = ActiveValue::Set(unit_type);

        Unit::from_entity(active_model.update(self.db).await?)
    }

    /// Hard-deletes a unit. The movement ledger keeps the unit's records.
    ///
    /// # Returns
    /// - `Ok(())` - Unit deleted
    /// - `Err(AppError::NotFound)` - No unit with that id
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = entity::prelude::Unit::delete_by_id(id).exec(self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Unit '{}' not found", id)));
        }

        Ok(())
    }

    /// Gets all units ordered by most recent movement first.
    pub async fn get_all(&self) -> Result<Vec<Unit>, AppError> {
        entity::prelude::Unit::find()
            .order_by_desc(entity::unit::Column::LastMovementTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(Unit::from_entity)
            .collect()
    }
}
