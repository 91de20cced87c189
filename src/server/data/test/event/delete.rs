use super::*;

/// Tests deleting an event.
///
/// Expected: Ok(true) on the first delete, Ok(false) when nothing matched
#[tokio::test]
async fn reports_whether_a_row_was_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::event::create_event(db).await?;

    let repo = EventRepository::new(db);

    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);

    Ok(())
}
