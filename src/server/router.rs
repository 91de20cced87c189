use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, event, news, payment, rule, store},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        rule::list_rules,
        rule::create_rule,
        rule::update_rule,
        rule::delete_rule,
        event::list_events,
        event::list_all_events,
        event::create_event,
        event::update_event,
        event::delete_event,
        news::list_news,
        news::get_news_post,
        news::list_all_news,
        news::create_news_post,
        news::update_news_post,
        news::delete_news_post,
        store::list_store_items,
        store::list_all_store_items,
        store::create_store_item,
        store::update_store_item,
        store::delete_store_item,
        payment::create_payment_request,
        payment::list_payment_requests,
        payment::update_payment_status,
        admin::list_admins,
        admin::create_admin,
        admin::update_admin_password,
        admin::set_admin_active,
    ),
    tags(
        (name = "rule", description = "Server rules"),
        (name = "event", description = "Community events"),
        (name = "news", description = "News posts"),
        (name = "store", description = "Storefront catalog"),
        (name = "payment", description = "Payment requests"),
        (name = "admin", description = "Administrator accounts"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        // Session endpoints
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::current_admin))
        // Public site endpoints
        .route("/api/rules", get(rule::list_rules))
        .route("/api/events", get(event::list_events))
        .route("/api/news", get(news::list_news))
        .route("/api/news/{id}", get(news::get_news_post))
        .route("/api/store", get(store::list_store_items))
        .route(
            "/api/payment-requests",
            post(payment::create_payment_request),
        )
        // Admin surface
        .route("/api/admin/rules", post(rule::create_rule))
        .route(
            "/api/admin/rules/{id}",
            put(rule::update_rule).delete(rule::delete_rule),
        )
        .route(
            "/api/admin/events",
            get(event::list_all_events).post(event::create_event),
        )
        .route(
            "/api/admin/events/{id}",
            put(event::update_event).delete(event::delete_event),
        )
        .route(
            "/api/admin/news",
            get(news::list_all_news).post(news::create_news_post),
        )
        .route(
            "/api/admin/news/{id}",
            put(news::update_news_post).delete(news::delete_news_post),
        )
        .route(
            "/api/admin/store",
            get(store::list_all_store_items).post(store::create_store_item),
        )
        .route(
            "/api/admin/store/{id}",
            put(store::update_store_item).delete(store::delete_store_item),
        )
        .route(
            "/api/admin/payment-requests",
            get(payment::list_payment_requests),
        )
        .route(
            "/api/admin/payment-requests/{id}/status",
            put(payment::update_payment_status),
        )
        .route(
            "/api/admin/admins",
            get(admin::list_admins).post(admin::create_admin),
        )
        .route(
            "/api/admin/admins/{id}/password",
            put(admin::update_admin_password),
        )
        .route(
            "/api/admin/admins/{id}/active",
            put(admin::set_admin_active),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
