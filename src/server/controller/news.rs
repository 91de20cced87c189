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
        news::{CreateNewsPostDto, NewsPostDto, UpdateNewsPostDto},
    },
    server::{
        error::AppError,
        middleware::auth::AdminGuard,
        model::news::{CreateNewsPostParams, UpdateNewsPostParams},
        service::news::NewsService,
        state::AppState,
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

/// List published news posts, most recently published first.
///
/// Public endpoint; feeds the news page.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "Published news posts", body = Vec<NewsPostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_news(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = NewsService::new(&state.db);

    let posts = service.get_published().await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one published news post.
///
/// Public endpoint; drafts are indistinguishable from missing posts.
#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "News post id")
    ),
    responses(
        (status = 200, description = "Published news post", body = NewsPostDto),
        (status = 404, description = "Post not found or not published", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = NewsService::new(&state.db);

    let post = service.get_published_by_id(id).await?;

    match post {
        Some(post) => Ok((StatusCode::OK, Json(post.into_dto()))),
        None => Err(AppError::NotFound("News post not found".to_string())),
    }
}

/// List every news post including drafts.
///
/// # Access Control
/// - `Admin` - Only admins can view drafts
#[utoipa::path(
    get,
    path = "/api/admin/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "All news posts", body = Vec<NewsPostDto>),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_all_news(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = NewsService::new(&state.db);

    let posts = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a news post.
///
/// # Access Control
/// - `Admin` - Only admins can create posts
#[utoipa::path(
    post,
    path = "/api/admin/news",
    tag = NEWS_TAG,
    request_body = CreateNewsPostDto,
    responses(
        (status = 201, description = "Created news post", body = NewsPostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CreateNewsPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = NewsService::new(&state.db);

    let post = service
        .create(CreateNewsPostParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Update a news post, including publishing and unpublishing it.
///
/// # Access Control
/// - `Admin` - Only admins can update posts
#[utoipa::path(
    put,
    path = "/api/admin/news/{id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "News post id")
    ),
    request_body = UpdateNewsPostDto,
    responses(
        (status = 200, description = "Updated news post", body = NewsPostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_news_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateNewsPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = NewsService::new(&state.db);

    let post = service
        .update(UpdateNewsPostParams::from_dto(id, payload))
        .await?;

    match post {
        Some(post) => Ok((StatusCode::OK, Json(post.into_dto()))),
        None => Err(AppError::NotFound("News post not found".to_string())),
    }
}

/// Delete a news post.
///
/// # Access Control
/// - `Admin` - Only admins can delete posts
#[utoipa::path(
    delete,
    path = "/api/admin/news/{id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "News post id")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Not an authenticated admin", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.db, &jar).require().await?;

    let service = NewsService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("News post not found".to_string()))
    }
}
