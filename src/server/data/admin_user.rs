//! Administrator account repository.
//!
//! Provides the lookups behind login and the per-request authorization check,
//! plus account management operations. The stored credential digest never
//! leaves this module except through `find_by_username`, which the auth
//! service uses for digest comparison.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::admin::Admin;

pub struct AdminUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an administrator by username, returning the raw entity model.
    ///
    /// This is the only lookup that exposes the stored digest; it exists for
    /// login verification. Account state is not filtered here so the caller
    /// can distinguish bad credentials from an inactive account in its logs.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Account found, including the stored digest
    /// - `Ok(None)` - No account with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::admin_user::Model>, DbErr> {
        entity::prelude::AdminUser::find()
            .filter(entity::admin_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Resolves an administrator id to an active account.
    ///
    /// This is the single authorization lookup performed per admin-surface
    /// request: one query filtered by id and by the active flag. Inactive and
    /// deleted accounts both come back as `None`.
    ///
    /// # Returns
    /// - `Ok(Some(Admin))` - Active administrator record
    /// - `Ok(None)` - No record, or the record is deactivated
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active_by_id(&self, id: i32) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::AdminUser::find()
            .filter(entity::admin_user::Column::Id.eq(id))
            .filter(entity::admin_user::Column::Active.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(Admin::from_entity))
    }

    /// Finds an administrator by id regardless of account state.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::AdminUser::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Admin::from_entity))
    }

    /// Gets all administrator accounts ordered by username.
    pub async fn get_all(&self) -> Result<Vec<Admin>, DbErr> {
        let entities = entity::prelude::AdminUser::find()
            .order_by_asc(entity::admin_user::Column::Username)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Admin::from_entity).collect())
    }

    /// Creates an administrator account with a pre-hashed credential digest.
    ///
    /// New accounts start active with no recorded login.
    pub async fn create(&self, username: String, password_hash: String) -> Result<Admin, DbErr> {
        let entity = entity::admin_user::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            active: ActiveValue::Set(true),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Admin::from_entity(entity))
    }

    /// Replaces the stored credential digest for an administrator.
    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::AdminUser::update_many()
            .filter(entity::admin_user::Column::Id.eq(id))
            .col_expr(
                entity::admin_user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets the active flag for an administrator account.
    pub async fn set_active(&self, id: i32, active: bool) -> Result<(), DbErr> {
        entity::prelude::AdminUser::update_many()
            .filter(entity::admin_user::Column::Id.eq(id))
            .col_expr(
                entity::admin_user::Column::Active,
                sea_orm::sea_query::Expr::value(active),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Records a successful login.
    ///
    /// Concurrent logins for the same account are not coordinated; the last
    /// successful write wins.
    pub async fn update_last_login(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::AdminUser::update_many()
            .filter(entity::admin_user::Column::Id.eq(id))
            .col_expr(
                entity::admin_user::Column::LastLogin,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
