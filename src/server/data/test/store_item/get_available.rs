use super::*;

/// Tests the storefront listing excludes delisted items.
///
/// Expected: only available items, while the admin listing sees everything
#[tokio::test]
async fn excludes_delisted_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StoreItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::store_item::StoreItemFactory::new(db)
        .name("listed")
        .build()
        .await?;
    factory::store_item::StoreItemFactory::new(db)
        .name("delisted")
        .available(false)
        .build()
        .await?;

    let repo = StoreItemRepository::new(db);

    let available = repo.get_available().await?;
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].name, "listed");

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
