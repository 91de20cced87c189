use super::*;

/// Tests the publication timestamp lifecycle across updates.
///
/// Expected: set on publish, kept on a republish-without-change, cleared on
/// unpublish
#[tokio::test]
async fn publication_timestamp_follows_transitions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let draft = factory::news_post::NewsPostFactory::new(db)
        .title("post")
        .published(false)
        .build()
        .await?;

    let repo = NewsPostRepository::new(db);

    // Publish
    let published = repo
        .update(UpdateNewsPostParams {
            id: draft.id,
            title: "post".to_string(),
            body: draft.body.clone(),
            published: true,
        })
        .await?
        .unwrap();
    let first_published_at = published.published_at;
    assert!(first_published_at.is_some());

    // Edit while staying published keeps the original timestamp
    let edited = repo
        .update(UpdateNewsPostParams {
            id: draft.id,
            title: "post (edited)".to_string(),
            body: draft.body.clone(),
            published: true,
        })
        .await?
        .unwrap();
    assert_eq!(edited.published_at, first_published_at);

    // Unpublish clears it
    let unpublished = repo
        .update(UpdateNewsPostParams {
            id: draft.id,
            title: "post (edited)".to_string(),
            body: draft.body.clone(),
            published: false,
        })
        .await?
        .unwrap();
    assert!(unpublished.published_at.is_none());

    Ok(())
}

/// Tests updating a missing post.
///
/// Expected: Ok(None), no error
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsPostRepository::new(db);

    let updated = repo
        .update(UpdateNewsPostParams {
            id: 9999,
            title: "missing".to_string(),
            body: String::new(),
            published: true,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
