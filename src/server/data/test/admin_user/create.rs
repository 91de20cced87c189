use super::*;

/// Tests creating an administrator account.
///
/// New accounts store the provided digest, start active, and have no
/// recorded login.
///
/// Expected: Ok(Admin) with active=true and last_login=None
#[tokio::test]
async fn creates_active_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminUserRepository::new(db);

    let admin = repo
        .create("admin".to_string(), "digest-value".to_string())
        .await?;

    assert_eq!(admin.username, "admin");
    assert!(admin.active);
    assert!(admin.last_login.is_none());

    // The stored digest round-trips through the username lookup
    let stored = repo.find_by_username("admin").await?.unwrap();
    assert_eq!(stored.password_hash, "digest-value");

    Ok(())
}
