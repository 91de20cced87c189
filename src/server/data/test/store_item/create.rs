use super::*;

/// Tests creating a store item.
///
/// Expected: Ok(StoreItem) with the provided fields persisted
#[tokio::test]
async fn creates_store_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StoreItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StoreItemRepository::new(db);

    let item = repo
        .create(CreateStoreItemParams {
            name: "Sultan RS".to_string(),
            description: "Rally-tuned sedan.".to_string(),
            category: "Vehicles".to_string(),
            price_cents: 1999,
            available: true,
        })
        .await?;

    assert_eq!(item.name, "Sultan RS");
    assert_eq!(item.price_cents, 1999);
    assert!(item.available);

    let found = repo.find_by_id(item.id).await?;
    assert_eq!(found, Some(item));

    Ok(())
}
