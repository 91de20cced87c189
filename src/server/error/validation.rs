use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Minimum accepted length for administrator passwords.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Invalid request input. Every variant results in 400 Bad Request with the
/// variant's message as the error body.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Unknown payment status: {0}")]
    UnknownStatus(String),

    #[error("Store item is not available")]
    ItemUnavailable,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
