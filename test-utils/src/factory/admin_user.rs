//! Administrator account factory for tests.
//!
//! Creates admin accounts with sensible defaults through a builder pattern.
//! The default stored digest is the SHA-256 of `"password123"` so login
//! tests can authenticate without computing a digest themselves.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// SHA-256 hex digest of `"password123"`.
pub const DEFAULT_PASSWORD_HASH: &str =
    "ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f";

/// Factory for creating test administrator accounts.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::admin_user::AdminUserFactory;
///
/// let admin = AdminUserFactory::new(&db)
///     .username("admin")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct AdminUserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
    active: bool,
}

impl<'a> AdminUserFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - username: `"admin_{id}"` where id is auto-incremented
    /// - password_hash: `DEFAULT_PASSWORD_HASH`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("admin_{}", id),
            password_hash: DEFAULT_PASSWORD_HASH.to_string(),
            active: true,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the account into the database.
    pub async fn build(self) -> Result<entity::admin_user::Model, DbErr> {
        entity::admin_user::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            active: ActiveValue::Set(self.active),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active administrator with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin_user::Model, DbErr> {
    AdminUserFactory::new(db).build().await
}
