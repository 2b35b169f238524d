use super::*;

/// Tests revoking every token of one user.
///
/// Tokens of other users must survive.
///
/// Expected: 2 tokens removed, other user's token still resolves
#[tokio::test]
async fn revokes_only_that_users_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let repo = AccessTokenRepository::new(db);
    repo.create(user.id, "a".to_string()).await?;
    repo.create(user.id, "b".to_string()).await?;
    repo.create(other.id, "c".to_string()).await?;

    let removed = repo.delete_for_user(user.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.find_user_by_token_hash("a").await?.is_none());
    assert!(repo.find_user_by_token_hash("c").await?.is_some());

    Ok(())
}
