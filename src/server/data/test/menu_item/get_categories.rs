use super::*;

/// Tests listing distinct categories.
///
/// Expected: each category once, sorted alphabetically
#[tokio::test]
async fn lists_distinct_sorted_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for category in ["Drinks", "Snacks", "Cocktails", "Drinks"] {
        factory::menu_item::MenuItemFactory::new(db)
            .category(category)
            .build()
            .await?;
    }

    let repo = MenuItemRepository::new(db);
    let categories = repo.get_categories().await?;

    assert_eq!(categories, vec!["Cocktails", "Drinks", "Snacks"]);

    Ok(())
}
