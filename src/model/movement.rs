//! Movement ledger domain model and operation parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    catalog::{Department, Section},
    dto::movement::MovementDto,
    error::AppError,
};

/// One immutable ledger record, joined with the operator's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    pub id: i32,
    pub unit_id: String,
    pub employee_id: i32,
    pub employee_name: String,
    pub movement_type: String,
    pub from_department: Department,
    pub to_department: Department,
    pub from_section: Section,
    pub to_section: Section,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

impl Movement {
    /// Converts a ledger entity (plus the joined employee, if it still exists)
    /// to the domain model. Records of deleted operators keep an empty name.
    pub fn from_entity(
        entity: entity::movement::Model,
        employee: Option<entity::employee::Model>,
    ) -> Result<Self, AppError> {
        let parse = |field: &str, err: String| {
            AppError::InternalError(format!("Movement {} {}: {}", entity.id, field, err))
        };

        let from_department = entity
            .from_department
            .parse::<Department>()
            .map_err(|e| parse("from_department", e.to_string()))?;
        let to_department = entity
            .to_department
            .parse::<Department>()
            .map_err(|e| parse("to_department", e.to_string()))?;
        let from_section = entity
            .from_section
            .parse::<Section>()
            .map_err(|e| parse("from_section", e.to_string()))?;
        let to_section = entity
            .to_section
            .parse::<Section>()
            .map_err(|e| parse("to_section", e.to_string()))?;

        Ok(Self {
            id: entity.id,
            unit_id: entity.unit_id,
            employee_id: entity.employee_id,
            employee_name: employee.map(|e| e.name).unwrap_or_default(),
            movement_type: entity.movement_type,
            from_department,
            to_department,
            from_section,
            to_section,
            notes: entity.notes,
            timestamp: entity.timestamp,
        })
    }

    pub fn into_dto(self) -> MovementDto {
        MovementDto {
            id: self.id,
            unit_id: self.unit_id,
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            movement_type: self.movement_type,
            from_department: self.from_department,
            to_department: self.to_department,
            from_section: self.from_section,
            to_section: self.to_section,
            notes: self.notes,
            timestamp: self.timestamp,
        }
    }
}

/// Parameters for the movement engine's single operation.
#[derive(Debug, Clone)]
pub struct MoveUnitParams {
    pub unit_id: String,
    pub target_department: Department,
    pub target_section: Section,
    pub employee_id: i32,
    pub movement_type: String,
    /// Stored as an empty string when omitted.
    pub notes: Option<String>,
}

/// Conjunctive (AND) ledger query filters. All optional; no filters means the
/// whole ledger.
#[derive(Debug, Clone, Default)]
pub struct MovementFilter {
    pub unit_id: Option<String>,
    pub employee_id: Option<i32>,
    pub date_from: Option<NaiveDate>,
    /// Inclusive through 23:59:59 of the given day.
    pub date_to: Option<NaiveDate>,
}
