//! Employee domain model and operation parameters.

use crate::{
    catalog::Department,
    dto::{auth::LoginResponseDto, employee::EmployeeDto},
    error::AppError,
};

/// An employee account, without the stored credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub department: Department,
    pub work_page: String,
}

impl Employee {
    /// Converts an entity model to the domain model, dropping the password.
    pub fn from_entity(entity: entity::employee::Model) -> Result<Self, AppError> {
        let department = entity
            .department
            .parse::<Department>()
            .map_err(|e| AppError::InternalError(format!("Employee {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            username: entity.username,
            department,
            work_page: entity.work_page,
        })
    }

    pub fn into_dto(self) -> EmployeeDto {
        EmployeeDto {
            id: self.id,
            name: self.name,
            username: self.username,
            department: self.department,
            work_page: self.work_page,
        }
    }

    pub fn into_login_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            id: self.id,
            name: self.name,
            username: self.username,
            department: self.department,
            work_page: self.work_page,
        }
    }
}

/// Parameters for creating an employee. `password` is the already-hashed
/// credential; hashing happens in the service layer.
#[derive(Debug, Clone)]
pub struct CreateEmployeeParams {
    pub name: String,
    pub username: String,
    pub password: String,
    pub department: Department,
    pub work_page: String,
}

/// Parameters for updating an employee. A `None` password keeps the stored
/// credential; `Some` carries a freshly hashed replacement.
#[derive(Debug, Clone)]
pub struct UpdateEmployeeParams {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub department: Department,
    pub work_page: String,
    pub password: Option<String>,
}
