use super::*;

/// Tests deactivation removes the account from the guard's lookup.
///
/// Expected: find_active_by_id returns None after deactivation, Some after
/// reactivation
#[tokio::test]
async fn toggles_guard_visibility() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::admin_user::create_admin(db).await?;

    let repo = AdminUserRepository::new(db);

    repo.set_active(created.id, false).await?;
    assert!(repo.find_active_by_id(created.id).await?.is_none());

    repo.set_active(created.id, true).await?;
    assert!(repo.find_active_by_id(created.id).await?.is_some());

    Ok(())
}
