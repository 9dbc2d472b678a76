//! Employee account management.

use sea_orm::DatabaseConnection;

use crate::{
    data::employee::EmployeeRepository,
    dto::employee::{CreateEmployeeDto, UpdateEmployeeDto},
    error::{auth::AuthError, AppError},
    model::employee::{CreateEmployeeParams, Employee, UpdateEmployeeParams},
};

/// Employee id of the root admin account, which cannot be deleted.
const ROOT_ADMIN_ID: i32 = 1;

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an employee account, hashing the password with bcrypt.
    ///
    /// # Returns
    /// - `Ok(Employee)` - The created account
    /// - `Err(AppError::Validation)` - Empty username or password
    /// - `Err(AppError::Conflict)` - Username already taken
    pub async fn create(&self, dto: CreateEmployeeDto) -> Result<Employee, AppError> {
        if dto.username.trim().is_empty() {
            return Err(AppError::Validation("Username is required".to_string()));
        }
        if dto.password.is_empty() {
            return Err(AppError::Validation("Password is required".to_string()));
        }

        let password = hash_password(&dto.password)?;

        EmployeeRepository::new(self.db)
            .create(CreateEmployeeParams {
                name: dto.name,
                username: dto.username,
                password,
                department: dto.department,
                work_page: dto.work_page,
            })
            .await
    }

    /// Updates an employee account; the password is re-hashed only when the
    /// payload carries a new one.
    pub async fn update(&self, id: i32, dto: UpdateEmployeeDto) -> Result<Employee, AppError> {
        if dto.username.trim().is_empty() {
            return Err(AppError::Validation("Username is required".to_string()));
        }

        let password = match dto.password.as_deref() {
            Some("") | None => None,
            Some(new_password) => Some(hash_password(new_password)?),
        };

        EmployeeRepository::new(self.db)
            .update(UpdateEmployeeParams {
                id,
                name: dto.name,
                username: dto.username,
                department: dto.department,
                work_page: dto.work_page,
                password,
            })
            .await
    }

    /// Deletes an employee account. The root admin is protected.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::AuthErr(ProtectedEmployee))` - Attempt to delete id 1
    /// - `Err(AppError::NotFound)` - No employee with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if id == ROOT_ADMIN_ID {
            return Err(AuthError::ProtectedEmployee.into());
        }

        EmployeeRepository::new(self.db).delete(id).await
    }
}

fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}
