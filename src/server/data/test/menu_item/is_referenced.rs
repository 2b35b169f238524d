use super::*;

/// Tests detecting menu items used by orders.
///
/// Expected: true for an ordered item, false for an unordered one
#[tokio::test]
async fn detects_ordered_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ordered = factory::menu_item::create_menu_item(db).await?;
    let unordered = factory::menu_item::create_menu_item(db).await?;
    factory::order::create_order(db, &ordered, 1).await?;

    let repo = MenuItemRepository::new(db);

    assert!(repo.is_referenced(ordered.id).await?);
    assert!(!repo.is_referenced(unordered.id).await?);

    Ok(())
}
