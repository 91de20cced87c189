use super::*;

/// Tests the listing orders by category, then position.
///
/// Expected: rules grouped by category alphabetically, each group in
/// position order
#[tokio::test]
async fn orders_by_category_then_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rule::RuleFactory::new(db)
        .category("Voice")
        .position(1)
        .content("voice-1")
        .build()
        .await?;
    factory::rule::RuleFactory::new(db)
        .category("General")
        .position(2)
        .content("general-2")
        .build()
        .await?;
    factory::rule::RuleFactory::new(db)
        .category("General")
        .position(1)
        .content("general-1")
        .build()
        .await?;

    let repo = RuleRepository::new(db);
    let rules = repo.get_all_ordered().await?;

    let contents: Vec<&str> = rules.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(contents, vec!["general-1", "general-2", "voice-1"]);

    Ok(())
}
