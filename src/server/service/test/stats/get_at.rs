use super::*;

/// Tests the aggregate bar statistics.
///
/// Orders are placed yesterday, earlier today, and in the previous month. Only today's
/// orders count towards revenue and only this month's towards the order count.
///
/// Expected: revenue of today's orders, monthly count 3, Tea on top, newest orders first
#[tokio::test]
async fn aggregates_revenue_counts_and_best_sellers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2025, 3, 15, 18, 0, 0).unwrap();

    let coffee = factory::menu_item::MenuItemFactory::new(db)
        .name("Coffee")
        .price(1_000)
        .build()
        .await?;
    let tea = factory::menu_item::MenuItemFactory::new(db)
        .name("Tea")
        .price(800)
        .build()
        .await?;

    let today_a = factory::order::OrderFactory::new(db)
        .line(coffee.id, 2, 1_000)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let today_b = factory::order::OrderFactory::new(db)
        .line(tea.id, 3, 800)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    factory::order::OrderFactory::new(db)
        .line(tea.id, 1, 800)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    factory::order::OrderFactory::new(db)
        .line(coffee.id, 1, 1_000)
        .created_at(Utc.with_ymd_and_hms(2025, 2, 28, 23, 30, 0).unwrap())
        .build()
        .await?;

    let stats = StatsService::new(db).get_at(now).await?;

    assert_eq!(stats.today_revenue, 2_000 + 2_400);
    assert_eq!(stats.monthly_orders, 3);
    assert_eq!(stats.top_item.as_deref(), Some("Tea"));
    assert_eq!(stats.top_items.len(), 2);
    assert_eq!(stats.top_items[0].quantity, 4);
    assert_eq!(stats.top_items[1].name, "Coffee");
    assert_eq!(stats.top_items[1].quantity, 3);
    assert_eq!(stats.recent_orders.len(), 4);
    assert_eq!(stats.recent_orders[0].id, today_b.id);
    assert_eq!(stats.recent_orders[1].id, today_a.id);

    Ok(())
}

/// Tests statistics over an empty bar.
///
/// Expected: zeros, no top item, empty lists
#[tokio::test]
async fn empty_when_no_orders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = StatsService::new(db).get().await?;

    assert_eq!(stats.today_revenue, 0);
    assert_eq!(stats.monthly_orders, 0);
    assert!(stats.top_item.is_none());
    assert!(stats.top_items.is_empty());
    assert!(stats.recent_orders.is_empty());

    Ok(())
}
