use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{error::AppError, service::stats::StatsService, state::AppState};

/// GET /api/stats
/// Headline dashboard counts.
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = StatsService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// GET /api/stats/comprehensive
/// Per-section counts and the section/type breakdown.
pub async fn get_comprehensive_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = StatsService::new(&state.db).comprehensive_stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}
