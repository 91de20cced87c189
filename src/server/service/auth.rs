//! Login and session-identity business logic.
//!
//! Every login rejection maps to the same generic 401 so the response never
//! reveals whether the username, the password, or the account state was the
//! problem; the distinct `AuthError` variants exist only for server-side
//! logs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::admin_user::AdminUserRepository,
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::admin::{Admin, LoginParams},
    service::credential::{CredentialHasher, DEFAULT_HASHER},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    hasher: &'a dyn CredentialHasher,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            hasher: &DEFAULT_HASHER,
        }
    }

    /// Creates a service with a specific hasher. Used by tests and available
    /// for a future migration away from the legacy digest scheme.
    pub fn with_hasher(db: &'a DatabaseConnection, hasher: &'a dyn CredentialHasher) -> Self {
        Self { db, hasher }
    }

    /// Authenticates an administrator from submitted credentials.
    ///
    /// Performs one lookup by username, compares credential digests, and
    /// requires the account to be active. On success the account's last-login
    /// timestamp is updated before returning; concurrent logins are not
    /// coordinated and the last write wins.
    ///
    /// # Returns
    /// - `Ok(Admin)` - Credentials accepted
    /// - `Err(AppError::ValidationErr)` - Missing username or password
    /// - `Err(AppError::AuthErr)` - Unknown username, digest mismatch, or
    ///   inactive account; all render as the same 401
    /// - `Err(AppError::DbErr)` - Database error during lookup or update
    pub async fn login(&self, params: LoginParams) -> Result<Admin, AppError> {
        if params.username.is_empty() {
            return Err(ValidationError::MissingField("username").into());
        }
        if params.password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }

        let repo = AdminUserRepository::new(self.db);

        let Some(account) = repo.find_by_username(&params.username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.hasher.verify(&params.password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !account.active {
            return Err(AuthError::AccountInactive(account.id).into());
        }

        repo.update_last_login(account.id).await?;

        Ok(Admin::from_entity(account))
    }
}
