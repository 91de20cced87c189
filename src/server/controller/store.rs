use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;

use crate::{
    model::{
        api::ErrorDto,
        store::{CreateStoreItemDto, StoreItemDto, UpdateStoreItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::AdminGuard,
        model::store::{CreateStoreItemParams, UpdateStoreItemParams},
        service::store::StoreService,
        state::AppState,
    },
};

/// Tag for grouping store endpoints in OpenAPI documentation
pub static STORE_TAG: &str = "store";

/// List available store items, grouped by category.
///
/// Public endpoint; feeds the storefront.
#[utoipa::path(
    get,
    path = "/api/store",
    tag = STORE_TAG,
    responses(
        (status = 200, description = "Available store items", body = Vec<StoreItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_store_items(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StoreService::new(&state.db);

    let items = service.get_available().await?;

    Ok((
        StatusCode::OK,
        Json(items.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List the full catalog including unavailable items.
///
/// # Access Control
/// - `Admin` - Only admins can view the full catalog
#[utoipa::path(
    get,
    path = "/api/admin/store",
    tag = STORE_TAG,
    responses(
        (status = 200, description = "Full catalog", body = Vec<StoreItemDto>),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_all_store_items(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = StoreService::new(&state.db);

    let items = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(items.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a store item.
///
/// # Access Control
/// - `Admin` - Only admins can create items
#[utoipa::path(
    post,
    path = "/api/admin/store",
    tag = STORE_TAG,
    request_body = CreateStoreItemDto,
    responses(
        (status = 201, description = "Created store item", body = StoreItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_store_item(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CreateStoreItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = StoreService::new(&state.db);

    let item = service
        .create(CreateStoreItemParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Update a store item, including delisting it.
///
/// # Access Control
/// - `Admin` - Only admins can update items
#[utoipa::path(
    put,
    path = "/api/admin/store/{id}",
    tag = STORE_TAG,
    params(
        ("id" = i32, Path, description = "Store item id")
    ),
    request_body = UpdateStoreItemDto,
    responses(
        (status = 200, description = "Updated store item", body = StoreItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_store_item(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStoreItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = StoreService::new(&state.db);

    let item = service
        .update(UpdateStoreItemParams::from_dto(id, payload))
        .await?;

    match item {
        Some(item) => Ok((StatusCode::OK, Json(item.into_dto()))),
        None => Err(AppError::NotFound("Store item not found".to_string())),
    }
}

/// Delete a store item.
///
/// # Access Control
/// - `Admin` - Only admins can delete items
#[utoipa::path(
    delete,
    path = "/api/admin/store/{id}",
    tag = STORE_TAG,
    params(
        ("id" = i32, Path, description = "Store item id")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_store_item(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = StoreService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Store item not found".to_string()))
    }
}
