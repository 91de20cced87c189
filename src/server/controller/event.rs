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
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::AdminGuard,
        model::event::{CreateEventParams, UpdateEventParams},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// List published upcoming events, soonest first.
///
/// Public endpoint; feeds the community calendar.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Published upcoming events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let events = service.get_upcoming().await?;

    Ok((
        StatusCode::OK,
        Json(events.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List every event including drafts and past events.
///
/// # Access Control
/// - `Admin` - Only admins can view the full event list
#[utoipa::path(
    get,
    path = "/api/admin/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events", body = Vec<EventDto>),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_all_events(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = EventService::new(&state.db);

    let events = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(events.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create an event.
///
/// # Access Control
/// - `Admin` - Only admins can create events
#[utoipa::path(
    post,
    path = "/api/admin/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Created event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = EventService::new(&state.db);

    let event = service.create(CreateEventParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Update an event.
///
/// # Access Control
/// - `Admin` - Only admins can update events
#[utoipa::path(
    put,
    path = "/api/admin/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Updated event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = EventService::new(&state.db);

    let event = service.update(UpdateEventParams::from_dto(id, payload)).await?;

    match event {
        Some(event) => Ok((StatusCode::OK, Json(event.into_dto()))),
        None => Err(AppError::NotFound("Event not found".to_string())),
    }
}

/// Delete an event.
///
/// # Access Control
/// - `Admin` - Only admins can delete events
#[utoipa::path(
    delete,
    path = "/api/admin/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = EventService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Event not found".to_string()))
    }
}
