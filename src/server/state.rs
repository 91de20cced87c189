//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone; the database connection is a pool whose clones share it.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Whether session cookies are issued with the `Secure` attribute.
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, secure_cookies: bool) -> Self {
        Self { db, secure_cookies }
    }
}
