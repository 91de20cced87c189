use super::*;

/// Tests finding an existing account by username.
///
/// The returned entity carries the stored digest so login verification can
/// compare against it.
///
/// Expected: Ok(Some(Model)) with matching account data
#[tokio::test]
async fn finds_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin_user::AdminUserFactory::new(db)
        .username("admin")
        .password_hash("digest-value")
        .build()
        .await?;

    let repo = AdminUserRepository::new(db);
    let account = repo.find_by_username("admin").await?;

    assert!(account.is_some());
    let account = account.unwrap();
    assert_eq!(account.username, "admin");
    assert_eq!(account.password_hash, "digest-value");

    Ok(())
}

/// Tests querying for a username with no account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminUserRepository::new(db);
    let account = repo.find_by_username("nobody").await?;

    assert!(account.is_none());

    Ok(())
}

/// Tests that inactive accounts are still found by username.
///
/// Login needs the row to distinguish bad credentials from a deactivated
/// account in its logs; the rejection happens in the service.
///
/// Expected: Ok(Some(Model)) with active=false
#[tokio::test]
async fn finds_inactive_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin_user::AdminUserFactory::new(db)
        .username("retired")
        .active(false)
        .build()
        .await?;

    let repo = AdminUserRepository::new(db);
    let account = repo.find_by_username("retired").await?;

    assert!(account.is_some());
    assert!(!account.unwrap().active);

    Ok(())
}
