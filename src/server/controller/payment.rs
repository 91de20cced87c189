use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        payment::{
            CreatePaymentRequestDto, PaginatedPaymentRequestsDto, PaymentRequestDto,
            UpdatePaymentStatusDto,
        },
    },
    server::{
        error::{validation::ValidationError, AppError},
        middleware::auth::AdminGuard,
        model::payment::{
            CreatePaymentRequestParams, GetPaymentRequestsParam, PaymentStatus,
            UpdatePaymentStatusParams,
        },
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment-request endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    20
}

/// Submit a payment request from the storefront.
///
/// Public endpoint. The referenced store item must exist and be available.
#[utoipa::path(
    post,
    path = "/api/payment-requests",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentRequestDto,
    responses(
        (status = 201, description = "Created payment request", body = PaymentRequestDto),
        (status = 400, description = "Missing fields or unavailable item", body = ErrorDto),
        (status = 404, description = "Store item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment_request(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.db);

    let request = service
        .create(CreatePaymentRequestParams {
            store_item_id: payload.store_item_id,
            player_name: payload.player_name,
            contact: payload.contact,
            note: payload.note,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// List payment requests with pagination, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can view payment requests
#[utoipa::path(
    get,
    path = "/api/admin/payment-requests",
    tag = PAYMENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "Paginated payment requests", body = PaginatedPaymentRequestsDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_payment_requests(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = PaymentService::new(&state.db);

    let requests = service
        .get_paginated(GetPaymentRequestsParam {
            page: params.page,
            per_page: params.entries,
        })
        .await?;

    Ok((StatusCode::OK, Json(requests.into_dto())))
}

/// Record a decision on a payment request.
///
/// Accepted statuses are `pending`, `approved`, and `rejected`.
///
/// # Access Control
/// - `Admin` - Only admins can decide payment requests
#[utoipa::path(
    put,
    path = "/api/admin/payment-requests/{id}/status",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment request id")
    ),
    request_body = UpdatePaymentStatusDto,
    responses(
        (status = 200, description = "Updated payment request", body = PaymentRequestDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 404, description = "Payment request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePaymentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let Some(status) = PaymentStatus::parse(&payload.status) else {
        return Err(ValidationError::UnknownStatus(payload.status).into());
    };

    let service = PaymentService::new(&state.db);

    let request = service
        .update_status(UpdatePaymentStatusParams { id, status })
        .await?;

    match request {
        Some(request) => Ok((StatusCode::OK, Json(request.into_dto()))),
        None => Err(AppError::NotFound("Payment request not found".to_string())),
    }
}
