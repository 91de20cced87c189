use super::*;

/// Tests the last-login timestamp is recorded.
///
/// Expected: last_login transitions from None to Some
#[tokio::test]
async fn records_login_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::admin_user::create_admin(db).await?;
    assert!(created.last_login.is_none());

    let repo = AdminUserRepository::new(db);
    repo.update_last_login(created.id).await?;

    let admin = repo.find_by_id(created.id).await?.unwrap();
    assert!(admin.last_login.is_some());

    Ok(())
}
