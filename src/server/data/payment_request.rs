use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::payment::{
    CreatePaymentRequestParams, PaymentRequest, PaymentStatus, UpdatePaymentStatusParams,
};

pub struct PaymentRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a payment request in the pending state.
    pub async fn create(&self, params: CreatePaymentRequestParams) -> Result<PaymentRequest, DbErr> {
        let now = Utc::now();
        let entity = entity::payment_request::ActiveModel {
            store_item_id: ActiveValue::Set(params.store_item_id),
            player_name: ActiveValue::Set(params.player_name),
            contact: ActiveValue::Set(params.contact),
            note: ActiveValue::Set(params.note),
            status: ActiveValue::Set(PaymentStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        PaymentRequest::from_entity(entity)
    }

    /// Gets payment requests with pagination, newest first.
    ///
    /// # Returns
    /// - `Ok((requests, total))` - Requests for the page and the total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<PaymentRequest>, u64), DbErr> {
        let paginator = entity::prelude::PaymentRequest::find()
            .order_by_desc(entity::payment_request::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let requests = entities
            .into_iter()
            .map(PaymentRequest::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((requests, total))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<PaymentRequest>, DbErr> {
        let entity = entity::prelude::PaymentRequest::find_by_id(id).one(self.db).await?;

        entity.map(PaymentRequest::from_entity).transpose()
    }

    /// Applies an admin status decision.
    ///
    /// # Returns
    /// - `Ok(Some(PaymentRequest))` - Updated request
    /// - `Ok(None)` - No request with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_status(
        &self,
        params: UpdatePaymentStatusParams,
    ) -> Result<Option<PaymentRequest>, DbErr> {
        let Some(existing) = entity::prelude::PaymentRequest::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::payment_request::ActiveModel = existing.into();
        active_model.status = ActiveValue::Set(params.status.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(PaymentRequest::from_entity(entity)?))
    }
}
