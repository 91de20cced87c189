use super::*;

/// Tests updating an existing item, including delisting it.
///
/// Expected: Ok(Some(StoreItem)) with new fields
#[tokio::test]
async fn updates_existing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StoreItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::store_item::create_store_item(db).await?;

    let repo = StoreItemRepository::new(db);

    let updated = repo
        .update(UpdateStoreItemParams {
            id: created.id,
            name: created.name.clone(),
            description: created.description.clone(),
            category: created.category.clone(),
            price_cents: 2500,
            available: false,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.price_cents, 2500);
    assert!(!updated.available);

    Ok(())
}

/// Tests updating a missing item.
///
/// Expected: Ok(None), no error
#[tokio::test]
async fn returns_none_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StoreItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StoreItemRepository::new(db);

    let updated = repo
        .update(UpdateStoreItemParams {
            id: 9999,
            name: "ghost".to_string(),
            description: String::new(),
            category: String::new(),
            price_cents: 0,
            available: false,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
