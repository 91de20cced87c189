use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;

use crate::{
    model::{
        admin::{AdminAccountDto, CreateAdminDto, SetAdminActiveDto, UpdateAdminPasswordDto},
        api::{ErrorDto, SuccessDto},
    },
    server::{
        error::AppError,
        middleware::auth::AdminGuard,
        model::admin::{CreateAdminParams, SetActiveParams, UpdatePasswordParams},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping administrator-account endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List all administrator accounts.
///
/// # Access Control
/// - `Admin` - Only admins can view the account list
#[utoipa::path(
    get,
    path = "/api/admin/admins",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All administrator accounts", body = Vec<AdminAccountDto>),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_admins(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = AdminService::new(&state.db);

    let admins = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            admins
                .into_iter()
                .map(|a| a.into_account_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create an administrator account.
///
/// The submitted password is hashed before storage and never persisted in
/// plaintext.
///
/// # Access Control
/// - `Admin` - Only admins can create accounts
#[utoipa::path(
    post,
    path = "/api/admin/admins",
    tag = ADMIN_TAG,
    request_body = CreateAdminDto,
    responses(
        (status = 201, description = "Created administrator account", body = AdminAccountDto),
        (status = 400, description = "Invalid username or password", body = ErrorDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CreateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = AdminService::new(&state.db);

    let admin = service
        .create(CreateAdminParams {
            username: payload.username,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(admin.into_account_dto())))
}

/// Replace an administrator's password.
///
/// # Access Control
/// - `Admin` - Only admins can change passwords
#[utoipa::path(
    put,
    path = "/api/admin/admins/{id}/password",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Administrator id")
    ),
    request_body = UpdateAdminPasswordDto,
    responses(
        (status = 200, description = "Password updated", body = SuccessDto),
        (status = 400, description = "Password below minimum length", body = ErrorDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 404, description = "Administrator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_admin_password(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAdminPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = AdminService::new(&state.db);

    service
        .update_password(UpdatePasswordParams {
            id,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Activate or deactivate an administrator account.
///
/// Deactivation takes effect on the account's next request.
///
/// # Access Control
/// - `Admin` - Only admins can change account state
#[utoipa::path(
    put,
    path = "/api/admin/admins/{id}/active",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Administrator id")
    ),
    request_body = SetAdminActiveDto,
    responses(
        (status = 200, description = "Account state updated", body = SuccessDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 404, description = "Administrator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_admin_active(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    Json(payload): Json<SetAdminActiveDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = AdminService::new(&state.db);

    service
        .set_active(SetActiveParams {
            id,
            active: payload.active,
        })
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
