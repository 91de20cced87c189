//! Per-request admin authorization guard.
//!
//! Every admin-surface handler calls `AdminGuard::require` as its first
//! statement. The guard resolves the session cookie to an id and performs
//! exactly one read-only lookup filtered by that id and the active flag.
//! Any failure along the way denies access; the guard never authorizes on
//! a partial result.

use axum_extra::extract::CookieJar;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::admin_user::AdminUserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AdminSession,
    model::admin::Admin,
};

pub struct AdminGuard<'a> {
    db: &'a DatabaseConnection,
    jar: &'a CookieJar,
}

impl<'a> AdminGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jar: &'a CookieJar) -> Self {
        Self { db, jar }
    }

    /// Requires the request to carry a session resolving to an active
    /// administrator.
    ///
    /// # Returns
    /// - `Ok(Admin)` - The authorized administrator record
    /// - `Err(AppError::AuthErr)` - No session, or the session does not
    ///   resolve to an active administrator; renders as 401 Unauthorized
    /// - `Err(AppError::DbErr)` - Database error during the lookup
    pub async fn require(&self) -> Result<Admin, AppError> {
        let Some(admin_id) = AdminSession::admin_id(self.jar) else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let repo = AdminUserRepository::new(self.db);

        let Some(admin) = repo.find_active_by_id(admin_id).await? else {
            return Err(AuthError::AdminNotFound(admin_id).into());
        };

        Ok(admin)
    }
}
