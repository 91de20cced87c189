use super::*;

/// Tests creating a rule.
///
/// Expected: Ok(Rule) with the provided fields persisted
#[tokio::test]
async fn creates_rule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RuleRepository::new(db);

    let rule = repo
        .create(CreateRuleParams {
            category: "Roleplay".to_string(),
            content: "Stay in character at all times.".to_string(),
            position: 1,
        })
        .await?;

    assert_eq!(rule.category, "Roleplay");
    assert_eq!(rule.content, "Stay in character at all times.");
    assert_eq!(rule.position, 1);

    let found = repo.find_by_id(rule.id).await?;
    assert_eq!(found, Some(rule));

    Ok(())
}
