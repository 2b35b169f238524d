use super::*;

/// Tests a partial update.
///
/// Only the provided fields change; the rest keep their values.
///
/// Expected: Ok(Some(User)) with the new name and admin flag, same email
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Old Name")
        .email("keep@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            id: user.id,
            name: Some("New Name".to_string()),
            is_admin: Some(true),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.email, "keep@example.com");
    assert!(updated.is_admin);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(UpdateUserParams {
            id: 999,
            name: Some("Nobody".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
