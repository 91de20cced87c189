use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message returned for every login rejection.
///
/// Shared by all rejection variants so the response never reveals whether the
/// username or the password was wrong, or that an account exists but is
/// disabled.
const LOGIN_REJECTED: &str = "Invalid username or password";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No session cookie was present, or its value did not resolve to an
    /// administrator id.
    #[error("Request carried no valid admin session")]
    NotAuthenticated,

    /// The session cookie named an id with no matching active administrator
    /// record. Covers both deleted and deactivated accounts.
    #[error("Session admin id {0} has no active administrator record")]
    AdminNotFound(i32),

    /// Login failed: unknown username or credential digest mismatch.
    #[error("Login rejected: bad credentials")]
    InvalidCredentials,

    /// Login failed: credentials matched but the account is deactivated.
    #[error("Login rejected: administrator {0} is inactive")]
    AccountInactive(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant is a 401. Guard failures return "Unauthorized"; login
/// rejections all share one generic message. Details are logged at debug
/// level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::NotAuthenticated | Self::AdminNotFound(_) => "Unauthorized",
            Self::InvalidCredentials | Self::AccountInactive(_) => LOGIN_REJECTED,
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
