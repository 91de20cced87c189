use super::*;

/// Tests deleting a store item.
///
/// Expected: Ok(true) on the first delete, Ok(false) when nothing matched
#[tokio::test]
async fn reports_whether_a_row_was_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StoreItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::store_item::create_store_item(db).await?;

    let repo = StoreItemRepository::new(db);

    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);

    Ok(())
}
