use super::*;

/// Tests logging in issues a token that resolves back to the user.
///
/// Expected: Ok((token, User)) and `authenticate(token)` returns the same user
#[tokio::test]
async fn issues_token_that_authenticates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let registered = service
        .signup("Fatou Ba", "fatou@example.com", "secret123")
        .await?;

    let (token, user) = service.login("FATOU@example.com", "secret123").await?;

    assert_eq!(user.id, registered.id);
    assert_eq!(token.len(), 48);

    let resolved = service.authenticate(&token).await?;
    assert_eq!(resolved.map(|u| u.id), Some(registered.id));

    Ok(())
}

/// Tests wrong password and unknown email fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .signup("Fatou Ba", "fatou@example.com", "secret123")
        .await?;

    assert!(matches!(
        service.login("fatou@example.com", "wrong-password").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login("nobody@example.com", "secret123").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logout revokes every issued token.
///
/// Expected: both tokens stop authenticating
#[tokio::test]
async fn logout_revokes_all_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let user = service
        .signup("Fatou Ba", "fatou@example.com", "secret123")
        .await?;
    let (first, _) = service.login("fatou@example.com", "secret123").await?;
    let (second, _) = service.login("fatou@example.com", "secret123").await?;

    service.logout(user.id).await?;

    assert!(service.authenticate(&first).await?.is_none());
    assert!(service.authenticate(&second).await?.is_none());

    Ok(())
}
