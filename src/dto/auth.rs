use serde::{Deserialize, Serialize};

use crate::catalog::Department;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Employee payload returned on successful login. Never carries the password.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct LoginResponseDto {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub department: Department,
    pub work_page: String,
}
