use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    controller::{auth, employee, movement, stats, unit},
    dto::api::MessageDto,
    state::AppState,
};

async fn api_root() -> Json<MessageDto> {
    Json(MessageDto::new("Welcome to UnitFlow API"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(api_root))
        .route("/api/login", post(auth::login))
        .route("/api/units", get(unit::get_units).post(unit::create_unit))
        .route(
            "/api/units/{id}",
            put(unit::update_unit).delete(unit::delete_unit),
        )
        .route("/api/units/{id}/move", put(unit::move_unit))
        .route("/api/movements", get(movement::get_movements))
        .route(
            "/api/employees",
            get(employee::get_employees).post(employee::create_employee),
        )
        .route(
            "/api/employees/{id}",
            put(employee::update_employee).delete(employee::delete_employee),
        )
        .route("/api/stats", get(stats::get_stats))
        .route("/api/stats/comprehensive", get(stats::get_comprehensive_stats))
        .layer(CorsLayer::permissive())
}
