use super::*;

/// Tests the account listing is ordered by username.
///
/// Expected: Ok(Vec<Admin>) sorted alphabetically
#[tokio::test]
async fn orders_accounts_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin_user::AdminUserFactory::new(db)
        .username("zoe")
        .build()
        .await?;
    factory::admin_user::AdminUserFactory::new(db)
        .username("amy")
        .active(false)
        .build()
        .await?;

    let repo = AdminUserRepository::new(db);
    let admins = repo.get_all().await?;

    assert_eq!(admins.len(), 2);
    assert_eq!(admins[0].username, "amy");
    assert_eq!(admins[1].username, "zoe");

    Ok(())
}
