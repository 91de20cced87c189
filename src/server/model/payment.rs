use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::payment::{PaginatedPaymentRequestsDto, PaymentRequestDto};

/// Review state of a payment request. Stored as its lowercase string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status string, returning `None` for anything unknown.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Purchase request submitted from the storefront, reviewed by admins.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub id: i32,
    pub store_item_id: i32,
    pub player_name: String,
    pub contact: String,
    pub note: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PaymentRequest {
    /// Converts an entity model at the repository boundary. A status string
    /// outside the known set means corrupt data and surfaces as a database
    /// error rather than a silently coerced value.
    pub fn from_entity(entity: entity::payment_request::Model) -> Result<Self, DbErr> {
        let status = PaymentStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown payment status '{}' on request {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            store_item_id: entity.store_item_id,
            player_name: entity.player_name,
            contact: entity.contact,
            note: entity.note,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> PaymentRequestDto {
        PaymentRequestDto {
            id: self.id,
            store_item_id: self.store_item_id,
            player_name: self.player_name,
            contact: self.contact,
            note: self.note,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a payment request from the public storefront.
#[derive(Debug, Clone)]
pub struct CreatePaymentRequestParams {
    pub store_item_id: i32,
    pub player_name: String,
    pub contact: String,
    pub note: Option<String>,
}

/// Parameters for an admin status decision on a payment request.
#[derive(Debug, Clone)]
pub struct UpdatePaymentStatusParams {
    pub id: i32,
    pub status: PaymentStatus,
}

/// Parameters for the paginated admin listing.
#[derive(Debug, Clone)]
pub struct GetPaymentRequestsParam {
    pub page: u64,
    pub per_page: u64,
}

/// Paginated collection of payment requests with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPaymentRequests {
    pub requests: Vec<PaymentRequest>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPaymentRequests {
    pub fn into_dto(self) -> PaginatedPaymentRequestsDto {
        PaginatedPaymentRequestsDto {
            requests: self.requests.into_iter().map(|r| r.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
