use super::*;

/// Tests paginating users ordered by name.
///
/// Creates three users and requests pages of two.
///
/// Expected: first page holds two users sorted by name, total is 3
#[tokio::test]
async fn paginates_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alice", "Bob"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let (first_page, total) = repo.get_all_paginated(0, 2).await?;
    let (second_page, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first_page.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
        vec!["Alice", "Bob"]
    );
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Charlie");

    Ok(())
}
