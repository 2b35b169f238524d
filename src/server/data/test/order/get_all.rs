use super::*;
use chrono::{Duration, Utc};

/// Tests listing orders newest first with their own lines.
///
/// Expected: newest order first, each order carrying only its lines
#[tokio::test]
async fn lists_newest_first_with_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::menu_item::create_menu_item(db).await?;
    let older = factory::order::OrderFactory::new(db)
        .line(item.id, 1, item.price)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::order::OrderFactory::new(db)
        .line(item.id, 3, item.price)
        .line(item.id, 1, item.price)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let orders = repo.get_all().await?;

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, newer.id);
    assert_eq!(orders[0].items.len(), 2);
    assert_eq!(orders[1].id, older.id);
    assert_eq!(orders[1].items.len(), 1);

    Ok(())
}
