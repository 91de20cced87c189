use super::*;

/// Tests recording an admin decision.
///
/// Expected: Ok(Some(PaymentRequest)) with the new status and a bumped
/// updated_at
#[tokio::test]
async fn applies_decision() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::store_item::create_store_item(db).await?;
    let created = factory::payment_request::create_payment_request(db, item.id).await?;

    let repo = PaymentRequestRepository::new(db);

    let updated = repo
        .update_status(UpdatePaymentStatusParams {
            id: created.id,
            status: PaymentStatus::Approved,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.status, PaymentStatus::Approved);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests deciding a missing request.
///
/// Expected: Ok(None), no error
#[tokio::test]
async fn returns_none_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRequestRepository::new(db);

    let updated = repo
        .update_status(UpdatePaymentStatusParams {
            id: 9999,
            status: PaymentStatus::Rejected,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
