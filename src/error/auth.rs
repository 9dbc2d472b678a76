use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown username or password mismatch during login.
    ///
    /// Results in a 401 Unauthorized response. The client-facing message never
    /// distinguishes between the two cases.
    #[error("Login failed for '{0}'")]
    InvalidCredentials(String),

    /// Attempt to delete the root admin account (employee id 1).
    ///
    /// Results in a 403 Forbidden response.
    #[error("Attempt to delete the root admin account")]
    ProtectedEmployee,
}

/// Converts authentication errors into HTTP responses.
///
/// The full error (including the attempted username) is logged at debug level
/// while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InvalidCredentials(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::ProtectedEmployee => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "The root admin account cannot be deleted".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
