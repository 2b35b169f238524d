use super::*;

mod require_admin;

/// Tests a request without an `Authorization` header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a non-bearer authorization scheme.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_other_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an unknown bearer token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = bearer("never-issued");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a valid token with no permission requirements.
///
/// Expected: Ok(User) for the token's owner
#[tokio::test]
async fn authenticates_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    issue_token(db, user.id, "guest-token").await;

    let headers = bearer("guest-token");
    let authenticated = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.email, user.email);

    Ok(())
}
