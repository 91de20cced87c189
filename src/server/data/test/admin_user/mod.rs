use crate::server::data::admin_user::AdminUserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_active_by_id;
mod find_by_username;
mod get_all;
mod set_active;
mod update_last_login;
mod update_password;
