//! Administrator account management business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::admin_user::AdminUserRepository,
    error::{
        validation::{ValidationError, MIN_PASSWORD_LENGTH},
        AppError,
    },
    model::admin::{Admin, CreateAdminParams, SetActiveParams, UpdatePasswordParams},
    service::credential::{CredentialHasher, DEFAULT_HASHER},
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
    hasher: &'a dyn CredentialHasher,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            hasher: &DEFAULT_HASHER,
        }
    }

    pub fn with_hasher(db: &'a DatabaseConnection, hasher: &'a dyn CredentialHasher) -> Self {
        Self { db, hasher }
    }

    /// Gets all administrator accounts ordered by username.
    pub async fn get_all(&self) -> Result<Vec<Admin>, AppError> {
        let repo = AdminUserRepository::new(self.db);
        let admins = repo.get_all().await?;
        Ok(admins)
    }

    /// Creates an administrator account.
    ///
    /// The username must be non-empty and unused; the password must meet the
    /// minimum length. The stored credential is the hashed digest, never the
    /// plaintext.
    ///
    /// # Returns
    /// - `Ok(Admin)` - Created account, active with no recorded login
    /// - `Err(AppError::ValidationErr)` - Empty username, short password, or
    ///   username already taken
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn create(&self, params: CreateAdminParams) -> Result<Admin, AppError> {
        if params.username.is_empty() {
            return Err(ValidationError::MissingField("username").into());
        }
        if params.password.len() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort.into());
        }

        let repo = AdminUserRepository::new(self.db);

        if repo.find_by_username(&params.username).await?.is_some() {
            return Err(ValidationError::UsernameTaken.into());
        }

        let digest = self.hasher.hash(&params.password);
        let admin = repo.create(params.username, digest).await?;

        Ok(admin)
    }

    /// Replaces an administrator's password with a freshly hashed digest.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(AppError::ValidationErr)` - Password below minimum length
    /// - `Err(AppError::NotFound)` - No administrator with that id
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn update_password(&self, params: UpdatePasswordParams) -> Result<(), AppError> {
        if params.password.len() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort.into());
        }

        let repo = AdminUserRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound("Administrator not found".to_string()));
        }

        let digest = self.hasher.hash(&params.password);
        repo.update_password(params.id, digest).await?;

        Ok(())
    }

    /// Activates or deactivates an administrator account.
    ///
    /// Deactivation takes effect on the account's next request: the guard
    /// re-checks the active flag every time, so a live cookie stops
    /// authorizing immediately.
    pub async fn set_active(&self, params: SetActiveParams) -> Result<(), AppError> {
        let repo = AdminUserRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound("Administrator not found".to_string()));
        }

        repo.set_active(params.id, params.active).await?;

        Ok(())
    }
}
