use crate::server::{
    data::payment_request::PaymentRequestRepository,
    model::payment::{CreatePaymentRequestParams, PaymentStatus, UpdatePaymentStatusParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update_status;
