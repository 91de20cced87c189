use super::*;

/// Tests creating a post directly as published.
///
/// Expected: Ok(NewsPost) with a publication timestamp
#[tokio::test]
async fn published_post_gets_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsPostRepository::new(db);

    let post = repo
        .create(CreateNewsPostParams {
            title: "Season opening".to_string(),
            body: "The server opens this weekend.".to_string(),
            published: true,
        })
        .await?;

    assert!(post.published);
    assert!(post.published_at.is_some());

    Ok(())
}

/// Tests creating a draft.
///
/// Expected: Ok(NewsPost) without a publication timestamp
#[tokio::test]
async fn draft_has_no_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsPostRepository::new(db);

    let post = repo
        .create(CreateNewsPostParams {
            title: "Draft".to_string(),
            body: "Not ready yet.".to_string(),
            published: false,
        })
        .await?;

    assert!(!post.published);
    assert!(post.published_at.is_none());

    Ok(())
}
