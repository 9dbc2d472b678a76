//! Employee repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use crate::{
    error::AppError,
    model::employee::{CreateEmployeeParams, Employee, UpdateEmployeeParams},
};

/// Repository providing database operations for employee accounts.
///
/// Callers outside the auth service only ever see the password-free
/// `Employee` domain model; `find_by_username` returns the raw entity
/// because credential verification needs the stored password.
pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new employee. `params.password` must already be hashed.
    ///
    /// # Returns
    /// - `Ok(Employee)` - The created employee, without the credential
    /// - `Err(AppError::Conflict)` - Username already taken
    pub async fn create(&self, params: CreateEmployeeParams) -> Result<Employee, AppError> {
        let entity = entity::employee::ActiveModel {
            name: ActiveValue::Set(params.name),
            username: ActiveValue::Set(params.username.clone()),
            password: ActiveValue::Set(params.password),
            department: ActiveValue::Set(params.department.as_str().to_string()),
            work_page: ActiveValue::Set(params.work_page),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict(format!("Username '{}' is already taken", params.username))
            }
            _ => AppError::DbErr(err),
        })?;

        Employee::from_entity(entity)
    }

    /// Finds the full employee row (including the stored credential) by
    /// username, for login verification.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::employee::Model>, AppError> {
        Ok(entity::prelude::Employee::find()
            .filter(entity::employee::Column::Username.eq(username))
            .one(self.db)
            .await?)
    }

    /// Updates an employee; the credential is replaced only when
    /// `params.password` carries a new hash.
    ///
    /// # Returns
    /// - `Ok(Employee)` - The updated employee
    /// - `Err(AppError::NotFound)` - No employee with that id
    /// - `Err(AppError::Conflict)` - New username already taken
    pub async fn update(&self, params: UpdateEmployeeParams) -> Result<Employee, AppError> {
        let entity = entity::prelude::Employee::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", params.id)))?;

        let mut active_model: entity::employee::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.username = ActiveValue::Set(params.username.clone());
        active_model.department = ActiveValue::Set(params.department.as_str().to_string());
        active_model.work_page = ActiveValue::Set(params.work_page);
        if let Some(password) = params.password {
            active_model.password = ActiveValue::Set(password);
        }

        let updated = active_model
            .update(self.db)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict(format!("Username '{}' is already taken", params.username))
                }
                _ => AppError::DbErr(err),
            })?;

        Employee::from_entity(updated)
    }

    /// Deletes an employee. Ledger records referencing the employee are kept.
    ///
    /// # Returns
    /// - `Ok(())` - Employee deleted
    /// - `Err(AppError::NotFound)` - No employee with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = entity::prelude::Employee::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }

        Ok(())
    }

    /// Gets all employees ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Employee>, AppError> {
        entity::prelude::Employee::find()
            .order_by_asc(entity::employee::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Employee::from_entity)
            .collect()
    }

    /// Counts all employee accounts.
    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(entity::prelude::Employee::find().count(self.db).await?)
    }
}
