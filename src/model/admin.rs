use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AdminDto {
    pub id: i32,
    pub username: String,
}

/// Administrator account details for the admin management screens.
///
/// Never carries the stored credential digest.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AdminAccountDto {
    pub id: i32,
    pub username: String,
    pub active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Login request body. Fields default to empty strings so a missing field is
/// reported as a validation error rather than a body-deserialization error.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub success: bool,
    pub admin: AdminDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateAdminDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateAdminPasswordDto {
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetAdminActiveDto {
    pub active: bool,
}
