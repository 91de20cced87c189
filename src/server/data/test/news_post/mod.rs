use crate::server::{
    data::news_post::NewsPostRepository,
    model::news::{CreateNewsPostParams, UpdateNewsPostParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_published_by_id;
mod get_published;
mod update;
