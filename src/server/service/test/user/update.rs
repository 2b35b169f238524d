use super::*;

/// Tests an admin edit of name, admin flag and password.
///
/// Expected: Ok(User) with new fields and the new password accepted at login
#[tokio::test]
async fn updates_fields_and_rehashes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = AuthService::new(db);
    let user = auth
        .signup("Khady Ndiaye", "khady@example.com", "first-pass")
        .await?;

    let updated = UserService::new(db)
        .update(
            user.id,
            UserChanges {
                name: Some("Khady N.".to_string()),
                password: Some("second-pass".to_string()),
                is_admin: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Khady N.");
    assert!(updated.is_admin);
    assert!(auth.login("khady@example.com", "second-pass").await.is_ok());

    Ok(())
}

/// Tests moving an account onto another account's email.
///
/// Expected: Err(AppError::Conflict), while re-submitting its own email is accepted
#[tokio::test]
async fn rejects_email_of_another_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::UserFactory::new(db)
        .email("first@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("second@example.com")
        .build()
        .await?;

    let service = UserService::new(db);

    let result = service
        .update(
            first.id,
            UserChanges {
                email: Some("Second@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let same = service
        .update(
            first.id,
            UserChanges {
                email: Some("FIRST@example.com".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(same.email, "first@example.com");

    Ok(())
}

/// Tests updating an account that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .update(
            404,
            UserChanges {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests an admin edit is normalized and secured like signup and password reset.
///
/// Verifies the name is trimmed, and a password change revokes bearer and reset tokens
/// while an edit without a password leaves the session alone.
///
/// Expected: trimmed name, old bearer and reset tokens rejected after the password change
#[tokio::test]
async fn trims_name_and_revokes_tokens_on_password_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = AuthService::new(db);
    let user = auth
        .signup("Fatou Sarr", "fatou@example.com", "first-pass")
        .await?;
    let (session, _) = auth.login("fatou@example.com", "first-pass").await?;
    let reset_token = auth.forgot_password("fatou@example.com").await?.unwrap();

    let service = UserService::new(db);

    let renamed = service
        .update(
            user.id,
            UserChanges {
                name: Some("  Fatou B. Sarr  ".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(renamed.name, "Fatou B. Sarr");
    assert!(auth.authenticate(&session).await?.is_some());

    service
        .update(
            user.id,
            UserChanges {
                password: Some("second-pass".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(auth.authenticate(&session).await?.is_none());
    assert!(matches!(
        auth.reset_password("fatou@example.com", &reset_token, "third-pass")
            .await,
        Err(AppError::AuthErr(AuthError::InvalidResetToken))
    ));

    Ok(())
}
