use super::*;

/// Tests replacing the stored credential digest.
///
/// Expected: subsequent username lookup returns the new digest
#[tokio::test]
async fn replaces_stored_digest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::admin_user::AdminUserFactory::new(db)
        .username("admin")
        .password_hash("old-digest")
        .build()
        .await?;

    let repo = AdminUserRepository::new(db);
    repo.update_password(created.id, "new-digest".to_string())
        .await?;

    let stored = repo.find_by_username("admin").await?.unwrap();
    assert_eq!(stored.password_hash, "new-digest");

    Ok(())
}
