pub use sea_orm_migration::prelude::*;

mod m20260212_000001_create_admin_user_table;
mod m20260212_000002_create_rule_table;
mod m20260213_000003_create_event_table;
mod m20260213_000004_create_news_post_table;
mod m20260214_000005_create_store_item_table;
mod m20260214_000006_create_payment_request_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260212_000001_create_admin_user_table::Migration),
            Box::new(m20260212_000002_create_rule_table::Migration),
            Box::new(m20260213_000003_create_event_table::Migration),
            Box::new(m20260213_000004_create_news_post_table::Migration),
            Box::new(m20260214_000005_create_store_item_table::Migration),
            Box::new(m20260214_000006_create_payment_request_table::Migration),
        ]
    }
}
