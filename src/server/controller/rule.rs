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
        rule::{CreateRuleDto, RuleDto, UpdateRuleDto},
    },
    server::{
        error::AppError,
        middleware::auth::AdminGuard,
        model::rule::{CreateRuleParams, UpdateRuleParams},
        service::rule::RuleService,
        state::AppState,
    },
};

/// Tag for grouping rule endpoints in OpenAPI documentation
pub static RULE_TAG: &str = "rule";

/// List all server rules, ordered by category and position.
///
/// Public endpoint; feeds the rules page.
#[utoipa::path(
    get,
    path = "/api/rules",
    tag = RULE_TAG,
    responses(
        (status = 200, description = "All rules in display order", body = Vec<RuleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_rules(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = RuleService::new(&state.db);

    let rules = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(rules.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a rule.
///
/// # Access Control
/// - `Admin` - Only admins can create rules
#[utoipa::path(
    post,
    path = "/api/admin/rules",
    tag = RULE_TAG,
    request_body = CreateRuleDto,
    responses(
        (status = 201, description = "Created rule", body = RuleDto),
        (status = 400, description = "Invalid rule data", body = ErrorDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rule(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CreateRuleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = RuleService::new(&state.db);

    let rule = service.create(CreateRuleParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(rule.into_dto())))
}

/// Update a rule.
///
/// # Access Control
/// - `Admin` - Only admins can update rules
#[utoipa::path(
    put,
    path = "/api/admin/rules/{id}",
    tag = RULE_TAG,
    params(
        ("id" = i32, Path, description = "Rule id")
    ),
    request_body = UpdateRuleDto,
    responses(
        (status = 200, description = "Updated rule", body = RuleDto),
        (status = 400, description = "Invalid rule data", body = ErrorDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 404, description = "Rule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_rule(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRuleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = RuleService::new(&state.db);

    let rule = service.update(UpdateRuleParams::from_dto(id, payload)).await?;

    match rule {
        Some(rule) => Ok((StatusCode::OK, Json(rule.into_dto()))),
        None => Err(AppError::NotFound("Rule not found".to_string())),
    }
}

/// Delete a rule.
///
/// # Access Control
/// - `Admin` - Only admins can delete rules
#[utoipa::path(
    delete,
    path = "/api/admin/rules/{id}",
    tag = RULE_TAG,
    params(
        ("id" = i32, Path, description = "Rule id")
    ),
    responses(
        (status = 204, description = "Rule deleted"),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 404, description = "Rule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rule(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = RuleService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Rule not found".to_string()))
    }
}
