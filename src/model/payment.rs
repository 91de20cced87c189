use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaymentRequestDto {
    pub id: i32,
    pub store_item_id: i32,
    pub player_name: String,
    pub contact: String,
    pub note: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentRequestDto {
    pub store_item_id: i32,
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub contact: String,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdatePaymentStatusDto {
    #[serde(default)]
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedPaymentRequestsDto {
    pub requests: Vec<PaymentRequestDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
