//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a payment request together with its store item dependency.
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize either side.
///
/// # Returns
/// - `Ok((item, request))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_payment_request_with_item(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::store_item::Model,
        entity::payment_request::Model,
    ),
    DbErr,
> {
    let item = crate::factory::store_item::create_store_item(db).await?;
    let request = crate::factory::payment_request::create_payment_request(db, item.id).await?;

    Ok((item, request))
}
