use super::*;

/// Tests creating a payment request.
///
/// Expected: Ok(PaymentRequest) in the pending state
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::store_item::create_store_item(db).await?;

    let repo = PaymentRequestRepository::new(db);

    let request = repo
        .create(CreatePaymentRequestParams {
            store_item_id: item.id,
            player_name: "Avery".to_string(),
            contact: "avery#0001".to_string(),
            note: Some("Birthday gift".to_string()),
        })
        .await?;

    assert_eq!(request.store_item_id, item.id);
    assert_eq!(request.player_name, "Avery");
    assert_eq!(request.status, PaymentStatus::Pending);

    let found = repo.find_by_id(request.id).await?;
    assert_eq!(found, Some(request));

    Ok(())
}
