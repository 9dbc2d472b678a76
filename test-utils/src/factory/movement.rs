//! Movement factory for creating test ledger records.
//!
//! This module provides factory methods for inserting movement ledger rows
//! directly, bypassing the service layer. Useful for seeding history when a
//! test only cares about querying the ledger.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test movement records with customizable fields.
///
/// The unit and employee references are required up front since every ledger
/// row attributes a transition to both. Departments and sections are accepted
/// as their snake_case wire names.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::movement::MovementFactory;
///
/// let record = MovementFactory::new(&db, &unit.id, employee.id)
///     .movement_type("maintenance")
///     .to_department("technical")
///     .to_section("awaiting_maintenance")
///     .timestamp(earlier)
///     .build()
///     .await?;
/// ```
pub struct MovementFactory<'a> {
    db: &'a DatabaseConnection,
    unit_id: String,
    employee_id: i32,
    movement_type: String,
    from_department: String,
    from_section: String,
    to_department: String,
    to_section: String,
    notes: String,
    timestamp: DateTime<Utc>,
}

impl<'a> MovementFactory<'a> {
    /// Creates a new MovementFactory with default values.
    ///
    /// Defaults:
    /// - movement_type: `"transfer"`
    /// - from: `operations` / `ready_for_loading`
    /// - to: `operations` / `under_loading`
    /// - notes: empty
    /// - timestamp: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `unit_id` - Identifier of the unit the record belongs to
    /// - `employee_id` - Identifier of the operator who performed the move
    ///
    /// # Returns
    /// - `MovementFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, unit_id: impl Into<String>, employee_id: i32) -> Self {
        Self {
            db,
            unit_id: unit_id.into(),
            employee_id,
            movement_type: "transfer".to_string(),
            from_department: "operations".to_string(),
            from_section: "ready_for_loading".to_string(),
            to_department: "operations".to_string(),
            to_section: "under_loading".to_string(),
            notes: String::new(),
            timestamp: Utc::now(),
        }
    }

    /// Sets the movement type label.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn movement_type(mut self, movement_type: impl Into<String>) -> Self {
        self.movement_type = movement_type.into();
        self
    }

    /// Sets the origin department wire name.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn from_department(mut self, from_department: impl Into<String>) -> Self {
        self.from_department = from_department.into();
        self
    }

    /// Sets the origin section wire name.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn from_section(mut self, from_section: impl Into<String>) -> Self {
        self.from_section = from_section.into();
        self
    }

    /// Sets the destination department wire name.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn to_department(mut self, to_department: impl Into<String>) -> Self {
        self.to_department = to_department.into();
        self
    }

    /// Sets the destination section wire name.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn to_section(mut self, to_section: impl Into<String>) -> Self {
        self.to_section = to_section.into();
        self
    }

    /// Sets the free-form notes for the record.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Sets the record timestamp, used by date-range filter tests.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the movement entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::movement::Model)` - Created movement entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::movement::Model, DbErr> {
        entity::movement::ActiveModel {
            id: ActiveValue::NotSet,
            unit_id: ActiveValue::Set(self.unit_id),
            employee_id: ActiveValue::Set(self.employee_id),
            movement_type: ActiveValue::Set(self.movement_type),
            from_department: ActiveValue::Set(self.from_department),
            from_section: ActiveValue::Set(self.from_section),
            to_department: ActiveValue::Set(self.to_department),
            to_section: ActiveValue::Set(self.to_section),
            notes: ActiveValue::Set(self.notes),
            timestamp: ActiveValue::Set(self.timestamp),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a movement record with default values.
///
/// Shorthand for `MovementFactory::new(db, unit_id, employee_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `unit_id` - Identifier of the unit the record belongs to
/// - `employee_id` - Identifier of the operator who performed the move
///
/// # Returns
/// - `Ok(entity::movement::Model)` - Created movement entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_movement(
    db: &DatabaseConnection,
    unit_id: impl Into<String>,
    employee_id: i32,
) -> Result<entity::movement::Model, DbErr> {
    MovementFactory::new(db, unit_id, employee_id).build().await
}
