use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::unit::UnitRepository,
    dto::{
        api::MessageDto,
        unit::{CreateUnitDto, MoveUnitDto, UnitDto, UpdateUnitDto},
    },
    error::AppError,
    model::{movement::MoveUnitParams, unit::CreateUnitParams},
    service::movement::MovementService,
    state::AppState,
};

/// GET /api/units
/// List all units, most recently moved first.
pub async fn get_units(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let units = UnitRepository::new(&state.db).get_all().await?;
    let dtos: Vec<UnitDto> = units.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/units
/// Create a unit in the default (operations, ready_for_loading) state.
pub async fn create_unit(
    State(state): State<AppState>,
    Json(dto): Json<CreateUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.id.trim().is_empty() {
        return Err(AppError::Validation("Unit id is required".to_string()));
    }

    let unit = UnitRepository::new(&state.db)
        .create(CreateUnitParams {
            id: dto.id,
            unit_type: dto.unit_type,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(unit.into_dto())))
}

/// PUT /api/units/{id}
/// Update a unit's type label.
pub async fn update_unit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    let unit = UnitRepository::new(&state.db)
        .update_type(&id, dto.unit_type)
        .await?;

    Ok((StatusCode::OK, Json(unit.into_dto())))
}

/// DELETE /api/units/{id}
/// Hard-delete a unit; its movement records are kept.
pub async fn delete_unit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    UnitRepository::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Unit deleted successfully")),
    ))
}

/// PUT /api/units/{id}/move
/// Move a unit to a new (department, section) pair, atomically appending the
/// audit record.
pub async fn move_unit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<MoveUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.movement_type.trim().is_empty() {
        return Err(AppError::Validation(
            "Movement type is required".to_string(),
        ));
    }

    let unit = MovementService::new(&state.db, state.unit_locks.clone())
        .move_unit(MoveUnitParams {
            unit_id: id,
            target_department: dto.target_department,
            target_section: dto.target_section,
            employee_id: dto.employee_id,
            movement_type: dto.movement_type,
            notes: dto.notes,
        })
        .await?;

    Ok((StatusCode::OK, Json(unit.into_dto())))
}
