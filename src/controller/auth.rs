use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::auth::LoginDto, error::AppError, service::auth::AuthService, state::AppState,
};

/// POST /api/login
/// Verify employee credentials and return the account payload.
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.username.is_empty() || dto.password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let employee = AuthService::new(&state.db)
        .login(&dto.username, &dto.password)
        .await?;

    Ok((StatusCode::OK, Json(employee.into_login_dto())))
}
