use super::*;

/// Tests resolving an id to an active administrator.
///
/// Expected: Ok(Some(Admin)) with matching data
#[tokio::test]
async fn finds_active_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::admin_user::AdminUserFactory::new(db)
        .username("admin")
        .build()
        .await?;

    let repo = AdminUserRepository::new(db);
    let admin = repo.find_active_by_id(created.id).await?;

    assert!(admin.is_some());
    let admin = admin.unwrap();
    assert_eq!(admin.id, created.id);
    assert_eq!(admin.username, "admin");
    assert!(admin.active);

    Ok(())
}

/// Tests that a deactivated account does not resolve.
///
/// This is the lookup behind the per-request guard, so an inactive account
/// must be indistinguishable from a missing one.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_inactive_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::admin_user::AdminUserFactory::new(db)
        .active(false)
        .build()
        .await?;

    let repo = AdminUserRepository::new(db);
    let admin = repo.find_active_by_id(created.id).await?;

    assert!(admin.is_none());

    Ok(())
}

/// Tests that an id with no record does not resolve.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminUserRepository::new(db);
    let admin = repo.find_active_by_id(9999).await?;

    assert!(admin.is_none());

    Ok(())
}
