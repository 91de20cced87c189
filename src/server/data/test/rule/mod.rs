use crate::server::{
    data::rule::RuleRepository,
    model::rule::{CreateRuleParams, UpdateRuleParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_ordered;
mod update;
