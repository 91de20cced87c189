use super::*;

/// Tests pagination over the request list.
///
/// Expected: page-sized chunks and an accurate total count
#[tokio::test]
async fn pages_through_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::store_item::create_store_item(db).await?;
    for _ in 0..5 {
        factory::payment_request::create_payment_request(db, item.id).await?;
    }

    let repo = PaymentRequestRepository::new(db);

    let (first_page, total) = repo.get_paginated(0, 2).await?;
    assert_eq!(first_page.len(), 2);
    assert_eq!(total, 5);

    let (last_page, _) = repo.get_paginated(2, 2).await?;
    assert_eq!(last_page.len(), 1);

    Ok(())
}

/// Tests an empty table paginates cleanly.
///
/// Expected: Ok((vec![], 0))
#[tokio::test]
async fn handles_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRequestRepository::new(db);

    let (requests, total) = repo.get_paginated(0, 20).await?;
    assert!(requests.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
