use crate::server::{
    data::store_item::StoreItemRepository,
    model::store::{CreateStoreItemParams, UpdateStoreItemParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_available;
mod update;
