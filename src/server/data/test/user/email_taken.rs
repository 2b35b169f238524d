use super::*;

/// Tests the email check used by signup.
///
/// Expected: true for a used email, false for an unused one
#[tokio::test]
async fn detects_used_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("awa@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("awa@example.com", None).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}

/// Tests that a user's own email does not count as taken when excluded.
///
/// Expected: false when the owner is excluded
#[tokio::test]
async fn ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("awa@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.email_taken("awa@example.com", Some(user.id)).await?);

    Ok(())
}
