use super::*;

/// Tests updating an existing rule.
///
/// Expected: Ok(Some(Rule)) with new fields and a bumped updated_at
#[tokio::test]
async fn updates_existing_rule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::rule::create_rule(db).await?;

    let repo = RuleRepository::new(db);

    let updated = repo
        .update(UpdateRuleParams {
            id: created.id,
            category: "Combat".to_string(),
            content: "No random death match.".to_string(),
            position: 3,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.category, "Combat");
    assert_eq!(updated.content, "No random death match.");
    assert_eq!(updated.position, 3);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating a missing rule.
///
/// Expected: Ok(None), no error
#[tokio::test]
async fn returns_none_for_missing_rule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RuleRepository::new(db);

    let updated = repo
        .update(UpdateRuleParams {
            id: 9999,
            category: "Combat".to_string(),
            content: "No random death match.".to_string(),
            position: 3,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
