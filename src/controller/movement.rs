use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::movement::MovementRepository,
    dto::movement::{MovementDto, MovementQueryDto},
    error::AppError,
    model::movement::MovementFilter,
    state::AppState,
};

/// GET /api/movements
/// Query the movement ledger; filters are optional and conjunctive, results
/// are most recent first.
pub async fn get_movements(
    State(state): State<AppState>,
    Query(query): Query<MovementQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let movements = MovementRepository::new(&state.db)
        .query(MovementFilter {
            unit_id: query.unit_id,
            employee_id: query.employee_id,
            date_from: query.date_from,
            date_to: query.date_to,
        })
        .await?;

    let dtos: Vec<MovementDto> = movements.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
