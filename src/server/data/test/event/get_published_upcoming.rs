use super::*;
use chrono::{Duration, Utc};

/// Tests the public calendar query.
///
/// Draft events and events that already started are excluded; the remainder
/// is ordered soonest first.
///
/// Expected: only future published events, in start order
#[tokio::test]
async fn filters_drafts_and_past_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();

    factory::event::EventFactory::new(db)
        .title("next-week")
        .starts_at(now + Duration::days(7))
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .title("tomorrow")
        .starts_at(now + Duration::days(1))
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .title("yesterday")
        .starts_at(now - Duration::days(1))
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .title("draft")
        .starts_at(now + Duration::days(2))
        .published(false)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let events = repo.get_published_upcoming(now).await?;

    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["tomorrow", "next-week"]);

    Ok(())
}
