//! Employee factory for creating test employee accounts.
//!
//! This module provides factory methods for creating employee entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
///
/// Provides a builder pattern for creating employee entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// Passwords are stored as given. Pass a bcrypt hash to exercise hashed
/// verification, or a plain string to exercise the legacy fallback.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::employee::EmployeeFactory;
///
/// let employee = EmployeeFactory::new(&db)
///     .username("azam")
///     .password("azam123")
///     .department("technical")
///     .build()
///     .await?;
/// ```
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    username: String,
    password: String,
    department: String,
    work_page: String,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Employee {id}"` where id is auto-incremented
    /// - username: `"employee_{id}"`
    /// - password: `"password123"`
    /// - department: `"operations"`
    /// - work_page: `"operations.html"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `EmployeeFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Employee {}", id),
            username: format!("employee_{}", id),
            password: "password123".to_string(),
            department: "operations".to_string(),
            work_page: "operations.html".to_string(),
        }
    }

    /// Sets the display name for the employee.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the login username for the employee.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password value, either a bcrypt hash or plaintext.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the department wire name for the employee.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the work page routing hint for the employee.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn work_page(mut self, work_page: impl Into<String>) -> Self {
        self.work_page = work_page.into();
        self
    }

    /// Builds and inserts the employee entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::employee::Model)` - Created employee entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            username: ActiveValue::Set(self.username),
            password: ActiveValue::Set(self.password),
            department: ActiveValue::Set(self.department),
            work_page: ActiveValue::Set(self.work_page),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values.
///
/// Shorthand for `EmployeeFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::employee::Model)` - Created employee entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let employee = create_employee(&db).await?;
/// ```
pub async fn create_employee(db: &DatabaseConnection) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).build().await
}
