use super::*;

/// Tests the full reset flow.
///
/// Verifies the new password works, the old one does not, existing sessions are revoked
/// and the reset token cannot be used twice.
///
/// Expected: Ok(()) then Err(AuthError::InvalidResetToken) on reuse
#[tokio::test]
async fn resets_password_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .signup("Ibrahima Fall", "ibra@example.com", "old-secret")
        .await?;
    let (session, _) = service.login("ibra@example.com", "old-secret").await?;

    let token = service
        .forgot_password("ibra@example.com")
        .await?
        .expect("token issued for known email");

    service
        .reset_password("ibra@example.com", &token, "new-secret")
        .await?;

    assert!(service.login("ibra@example.com", "new-secret").await.is_ok());
    assert!(matches!(
        service.login("ibra@example.com", "old-secret").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(service.authenticate(&session).await?.is_none());

    assert!(matches!(
        service
            .reset_password("ibra@example.com", &token, "another-secret")
            .await,
        Err(AppError::AuthErr(AuthError::InvalidResetToken))
    ));

    Ok(())
}

/// Tests an unknown email issues no token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn issues_nothing_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let token = AuthService::new(db)
        .forgot_password("ghost@example.com")
        .await?;

    assert!(token.is_none());

    Ok(())
}

/// Tests a token used after its validity window.
///
/// Expected: Err(AuthError::InvalidResetToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .signup("Ibrahima Fall", "ibra@example.com", "old-secret")
        .await?;

    let issued_at = Utc::now() - Duration::minutes(61);
    let token = service
        .forgot_password_at("ibra@example.com", issued_at)
        .await?
        .expect("token issued for known email");

    let result = service
        .reset_password("ibra@example.com", &token, "new-secret")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidResetToken))
    ));

    Ok(())
}

/// Tests a token issued for another account.
///
/// Expected: Err(AuthError::InvalidResetToken)
#[tokio::test]
async fn rejects_token_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service.signup("A", "a@example.com", "secret-a").await?;
    service.signup("B", "b@example.com", "secret-b").await?;

    let token = service.forgot_password("a@example.com").await?.unwrap();

    let result = service
        .reset_password("b@example.com", &token, "hijacked")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidResetToken))
    ));

    Ok(())
}
