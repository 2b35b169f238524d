use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with is_admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .name("Front Desk")
        .admin(true)
        .build()
        .await?;
    issue_token(db, admin.id, "admin-token").await;

    let headers = bearer("admin-token");
    let user = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.name, "Front Desk");
    assert!(user.is_admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied) carrying the caller's ID
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    issue_token(db, guest.id, "guest-token").await;

    let headers = bearer("guest-token");
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, guest.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other),
    }

    Ok(())
}
