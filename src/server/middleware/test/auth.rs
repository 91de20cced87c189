use axum_extra::extract::cookie::{Cookie, CookieJar};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AdminGuard, session::ADMIN_SESSION_COOKIE},
};

fn jar_with_session(value: &str) -> CookieJar {
    CookieJar::new().add(Cookie::new(ADMIN_SESSION_COOKIE, value.to_string()))
}

/// Tests an active administrator's session passes the guard.
///
/// Expected: Ok(Admin) with the account's data
#[tokio::test]
async fn grants_access_to_active_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin_user::AdminUserFactory::new(db)
        .username("admin")
        .build()
        .await?;

    let jar = jar_with_session(&admin.id.to_string());

    let result = AdminGuard::new(db, &jar).require().await;

    assert!(result.is_ok());
    let authorized = result.unwrap();
    assert_eq!(authorized.id, admin.id);
    assert_eq!(authorized.username, "admin");

    Ok(())
}

/// Tests a request without the session cookie is denied.
///
/// Expected: Err(AuthError::NotAuthenticated)
#[tokio::test]
async fn denies_access_without_cookie() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jar = CookieJar::new();

    let result = AdminGuard::new(db, &jar).require().await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::NotAuthenticated) => {}
        e => panic!("Expected NotAuthenticated error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a cookie whose value is not a row id is denied.
///
/// A malformed value resolves to "no session" rather than an error, so the
/// guard fails closed.
///
/// Expected: Err(AuthError::NotAuthenticated)
#[tokio::test]
async fn denies_access_for_malformed_cookie() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jar = jar_with_session("definitely-not-an-id");

    let result = AdminGuard::new(db, &jar).require().await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::NotAuthenticated) => {}
        e => panic!("Expected NotAuthenticated error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a session naming an id with no record is denied.
///
/// Expected: Err(AuthError::AdminNotFound)
#[tokio::test]
async fn denies_access_for_unknown_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jar = jar_with_session("424242");

    let result = AdminGuard::new(db, &jar).require().await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AdminNotFound(id)) => assert_eq!(id, 424242),
        e => panic!("Expected AdminNotFound error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a live session stops authorizing once the account is deactivated.
///
/// Expected: Err(AuthError::AdminNotFound) even though the cookie is valid
#[tokio::test]
async fn denies_access_for_inactive_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin_user::AdminUserFactory::new(db)
        .active(false)
        .build()
        .await?;

    let jar = jar_with_session(&admin.id.to_string());

    let result = AdminGuard::new(db, &jar).require().await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AdminNotFound(id)) => assert_eq!(id, admin.id),
        e => panic!("Expected AdminNotFound error, got: {:?}", e),
    }

    Ok(())
}
