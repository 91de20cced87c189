use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;

use crate::{
    model::{
        admin::{LoginDto, LoginResponseDto},
        api::SuccessDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AdminGuard, session::AdminSession},
        model::admin::LoginParams,
        service::auth::AuthService,
        state::AppState,
    },
};

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let admin = service
        .login(LoginParams {
            username: payload.username,
            password: payload.password,
        })
        .await?;

    let jar = jar.add(AdminSession::issue(admin.id, state.secure_cookies));

    Ok((
        StatusCode::OK,
        jar,
        Json(LoginResponseDto {
            success: true,
            admin: admin.into_dto(),
        }),
    ))
}

/// Logout always succeeds, whether or not a session existed.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(AdminSession::expire());

    (StatusCode::OK, jar, Json(SuccessDto { success: true }))
}

pub async fn current_admin(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let admin = AdminGuard::new(&state.db, &jar).require().await?;

    Ok((StatusCode::OK, Json(admin.into_dto())))
}
