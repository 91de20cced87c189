use super::*;
use chrono::{Duration, Utc};

/// Tests updating an existing event, including publishing it.
///
/// Expected: Ok(Some(Event)) with new fields
#[tokio::test]
async fn updates_existing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::event::EventFactory::new(db)
        .published(false)
        .build()
        .await?;

    let repo = EventRepository::new(db);

    let updated = repo
        .update(UpdateEventParams {
            id: created.id,
            title: "Renamed".to_string(),
            description: created.description.clone(),
            location: None,
            starts_at: Utc::now() + Duration::days(5),
            published: true,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.title, "Renamed");
    assert!(updated.published);

    Ok(())
}

/// Tests updating a missing event.
///
/// Expected: Ok(None), no error
#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);

    let updated = repo
        .update(UpdateEventParams {
            id: 9999,
            title: "Renamed".to_string(),
            description: String::new(),
            location: None,
            starts_at: Utc::now(),
            published: true,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
