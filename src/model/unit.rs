//! Unit domain model and operation parameters.

use chrono::{DateTime, Utc};

use crate::{
    catalog::{Department, Section},
    dto::unit::UnitDto,
    error::AppError,
};

/// A unit with its current workflow position.
///
/// Invariant: `current_section` always belongs to `current_department`'s
/// section set. The movement engine is the only writer of the position fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: String,
    pub unit_type: String,
    pub current_department: Department,
    pub current_section: Section,
    pub last_movement_time: DateTime<Utc>,
}

impl Unit {
    /// Converts an entity model to the domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Unit)` - The converted unit
    /// - `Err(AppError::InternalError)` - Stored department or section string is
    ///   not a catalog member (corrupt row)
    pub fn from_entity(entity: entity::unit::Model) -> Result<Self, AppError> {
        let current_department = entity
            .current_department
            .parse::<Department>()
            .map_err(|e| AppError::InternalError(format!("Unit '{}': {}", entity.id, e)))?;
        let current_section = entity
            .current_section
            .parse::<Section>()
            .map_err(|e| AppError::InternalError(format!("Unit '{}': {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            unit_type: entity.unit_type,
            current_department,
            current_section,
            last_movement_time: entity.last_movement_time,
        })
    }

    pub fn into_dto(self) -> UnitDto {
        UnitDto {
            id: self.id,
            unit_type: self.unit_type,
            current_department: self.current_department,
            current_section: self.current_section,
            last_movement_time: self.last_movement_time,
        }
    }
}

/// Parameters for creating a unit. New units always start in
/// `(operations, ready_for_loading)`.
#[derive(Debug, Clone)]
pub struct CreateUnitParams {
    pub id: String,
    pub unit_type: String,
}
