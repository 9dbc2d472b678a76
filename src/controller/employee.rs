use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::employee::EmployeeRepository,
    dto::{
        api::MessageDto,
        employee::{CreateEmployeeDto, EmployeeDto, UpdateEmployeeDto},
    },
    error::AppError,
    service::employee::EmployeeService,
    state::AppState,
};

/// GET /api/employees
/// List all employee accounts (without credentials).
pub async fn get_employees(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let employees = EmployeeRepository::new(&state.db).get_all().await?;
    let dtos: Vec<EmployeeDto> = employees.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/employees
/// Create an employee account with a bcrypt-hashed password.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(dto): Json<CreateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let employee = EmployeeService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(employee.into_dto())))
}

/// PUT /api/employees/{id}
/// Update an employee account; the password changes only when provided.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let employee = EmployeeService::new(&state.db).update(id, dto).await?;

    Ok((StatusCode::OK, Json(employee.into_dto())))
}

/// DELETE /api/employees/{id}
/// Delete an employee account; the root admin (id 1) is protected.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    EmployeeService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Employee deleted successfully")),
    ))
}
