//! Unit factory for creating test unit entities.
//!
//! This module provides factory methods for creating tracked units with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test units with customizable fields.
///
/// Provides a builder pattern for creating unit entities with default values
/// that can be overridden as needed for specific test scenarios. Department
/// and section are accepted as their snake_case wire names, matching how
/// they are stored.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::unit::UnitFactory;
///
/// let unit = UnitFactory::new(&db)
///     .id("TRK-100")
///     .unit_type("tanker")
///     .department("fuel")
///     .section("awaiting_refuel")
///     .build()
///     .await?;
/// ```
pub struct UnitFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    unit_type: String,
    current_department: String,
    current_section: String,
    last_movement_time: DateTime<Utc>,
}

impl<'a> UnitFactory<'a> {
    /// Creates a new UnitFactory with default values.
    ///
    /// Defaults:
    /// - id: `"UNIT-{n}"` where n is auto-incremented
    /// - unit_type: `"truck"`
    /// - department: `"operations"`
    /// - section: `"ready_for_loading"`
    /// - last_movement_time: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UnitFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: format!("UNIT-{}", n),
            unit_type: "truck".to_string(),
            current_department: "operations".to_string(),
            current_section: "ready_for_loading".to_string(),
            last_movement_time: Utc::now(),
        }
    }

    /// Sets the caller-assigned unit identifier.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the unit category label.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn unit_type(mut self, unit_type: impl Into<String>) -> Self {
        self.unit_type = unit_type.into();
        self
    }

    /// Sets the current department wire name.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.current_department = department.into();
        self
    }

    /// Sets the current section wire name.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.current_section = section.into();
        self
    }

    /// Sets the last movement timestamp.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn last_movement_time(mut self, last_movement_time: DateTime<Utc>) -> Self {
        self.last_movement_time = last_movement_time;
        self
    }

    /// Builds and inserts the unit entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::unit::Model)` - Created unit entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::unit::Model, DbErr> {
        entity::unit::ActiveModel {
            id: ActiveValue::Set(self.id),
            unit_type: ActiveValue::Set(self.unit_type),
            current_department: ActiveValue::Set(self.current_department),
            current_section: ActiveValue::Set(self.current_section),
            last_movement_time: ActiveValue::Set(self.last_movement_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a unit with default values.
///
/// Shorthand for `UnitFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::unit::Model)` - Created unit entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let unit = create_unit(&db).await?;
/// ```
pub async fn create_unit(db: &DatabaseConnection) -> Result<entity::unit::Model, DbErr> {
    UnitFactory::new(db).build().await
}
