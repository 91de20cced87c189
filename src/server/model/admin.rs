//! Administrator domain models and parameters.
//!
//! The `Admin` model deliberately omits the stored credential digest; the
//! digest only exists at the data layer where login verification happens.

use chrono::{DateTime, Utc};

use crate::model::admin::{AdminAccountDto, AdminDto};

/// Administrator account as seen by business logic and responses.
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    /// Deactivated accounts keep their row but stop authorizing.
    pub active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn from_entity(entity: entity::admin_user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            active: entity.active,
            last_login: entity.last_login,
            created_at: entity.created_at,
        }
    }

    /// Minimal identity DTO used by the login and current-admin responses.
    pub fn into_dto(self) -> AdminDto {
        AdminDto {
            id: self.id,
            username: self.username,
        }
    }

    /// Full account DTO for the administrator management endpoints.
    pub fn into_account_dto(self) -> AdminAccountDto {
        AdminAccountDto {
            id: self.id,
            username: self.username,
            active: self.active,
            last_login: self.last_login,
            created_at: self.created_at,
        }
    }
}

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

/// Parameters for creating an administrator account.
#[derive(Debug, Clone)]
pub struct CreateAdminParams {
    pub username: String,
    /// Plaintext password; hashed by the service before storage.
    pub password: String,
}

/// Parameters for replacing an administrator's password.
#[derive(Debug, Clone)]
pub struct UpdatePasswordParams {
    pub id: i32,
    pub password: String,
}

/// Parameters for activating or deactivating an administrator.
#[derive(Debug, Clone)]
pub struct SetActiveParams {
    pub id: i32,
    pub active: bool,
}
