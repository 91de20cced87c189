use super::*;

/// Tests a draft cannot be fetched by id through the public lookup.
///
/// Expected: Ok(None) for a draft, Ok(Some) for a published post
#[tokio::test]
async fn drafts_are_invisible_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let draft = factory::news_post::NewsPostFactory::new(db)
        .published(false)
        .build()
        .await?;
    let published = factory::news_post::create_news_post(db).await?;

    let repo = NewsPostRepository::new(db);

    assert!(repo.find_published_by_id(draft.id).await?.is_none());
    assert!(repo.find_published_by_id(published.id).await?.is_some());

    // The unrestricted lookup still sees the draft
    assert!(repo.find_by_id(draft.id).await?.is_some());

    Ok(())
}
