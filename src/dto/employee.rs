use serde::{Deserialize, Serialize};

use crate::catalog::Department;

/// Employee as exposed over the API. The password column is never serialized.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct EmployeeDto {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub department: Department,
    pub work_page: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateEmployeeDto {
    pub name: String,
    pub username: String,
    pub password: String,
    pub department: Department,
    pub work_page: String,
}

/// Update payload; a `None` password leaves the stored credential untouched.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateEmployeeDto {
    pub name: String,
    pub username: String,
    pub department: Department,
    pub work_page: String,
    #[serde(default)]
    pub password: Option<String>,
}
