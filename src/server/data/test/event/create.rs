use super::*;
use chrono::{Duration, Utc};

/// Tests creating an event.
///
/// Expected: Ok(Event) with the provided fields persisted
#[tokio::test]
async fn creates_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let starts_at = Utc::now() + Duration::days(3);

    let repo = EventRepository::new(db);

    let event = repo
        .create(CreateEventParams {
            title: "Car meet".to_string(),
            description: "Bring your ride.".to_string(),
            location: Some("Docks".to_string()),
            starts_at,
            published: false,
        })
        .await?;

    assert_eq!(event.title, "Car meet");
    assert_eq!(event.location.as_deref(), Some("Docks"));
    assert!(!event.published);

    let found = repo.find_by_id(event.id).await?;
    assert_eq!(found, Some(event));

    Ok(())
}
