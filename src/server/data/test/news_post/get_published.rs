use super::*;

/// Tests the public news listing excludes drafts.
///
/// Expected: only published posts are returned
#[tokio::test]
async fn excludes_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::news_post::NewsPostFactory::new(db)
        .title("visible")
        .build()
        .await?;
    factory::news_post::NewsPostFactory::new(db)
        .title("hidden")
        .published(false)
        .build()
        .await?;

    let repo = NewsPostRepository::new(db);
    let posts = repo.get_published().await?;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "visible");

    Ok(())
}
