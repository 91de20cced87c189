//! Payment request business logic.
//!
//! Visitors create requests against available store items; admins page
//! through them and record a decision. There is no payment processing here,
//! only the request/decision records the staff work from.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{payment_request::PaymentRequestRepository, store_item::StoreItemRepository},
    error::{validation::ValidationError, AppError},
    model::payment::{
        CreatePaymentRequestParams, GetPaymentRequestsParam, PaginatedPaymentRequests,
        PaymentRequest, UpdatePaymentStatusParams,
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a payment request from the public storefront.
    ///
    /// The referenced store item must exist and be available; requests
    /// against delisted items are rejected before anything is written.
    ///
    /// # Returns
    /// - `Ok(PaymentRequest)` - Created request in the pending state
    /// - `Err(AppError::ValidationErr)` - Missing fields or unavailable item
    /// - `Err(AppError::NotFound)` - Store item does not exist
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn create(
        &self,
        params: CreatePaymentRequestParams,
    ) -> Result<PaymentRequest, AppError> {
        if params.player_name.is_empty() {
            return Err(ValidationError::MissingField("player_name").into());
        }
        if params.contact.is_empty() {
            return Err(ValidationError::MissingField("contact").into());
        }

        let item_repo = StoreItemRepository::new(self.db);
        let Some(item) = item_repo.find_by_id(params.store_item_id).await? else {
            return Err(AppError::NotFound("Store item not found".to_string()));
        };
        if !item.available {
            return Err(ValidationError::ItemUnavailable.into());
        }

        let repo = PaymentRequestRepository::new(self.db);
        let request = repo.create(params).await?;
        Ok(request)
    }

    /// Gets payment requests with pagination, newest first.
    pub async fn get_paginated(
        &self,
        param: GetPaymentRequestsParam,
    ) -> Result<PaginatedPaymentRequests, AppError> {
        let repo = PaymentRequestRepository::new(self.db);

        let (requests, total) = repo.get_paginated(param.page, param.per_page).await?;

        let total_pages = (total as f64 / param.per_page as f64).ceil() as u64;

        Ok(PaginatedPaymentRequests {
            requests,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Applies an admin decision to a payment request.
    pub async fn update_status(
        &self,
        params: UpdatePaymentStatusParams,
    ) -> Result<Option<PaymentRequest>, AppError> {
        let repo = PaymentRequestRepository::new(self.db);
        let request = repo.update_status(params).await?;
        Ok(request)
    }
}
