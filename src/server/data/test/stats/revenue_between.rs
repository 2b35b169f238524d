use super::*;

/// Tests summing and counting orders inside a time window.
///
/// Expected: only the orders created inside the window are counted
#[tokio::test]
async fn sums_orders_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::menu_item::MenuItemFactory::new(db)
        .price(1_000)
        .build()
        .await?;
    let now = Utc::now();

    factory::order::OrderFactory::new(db)
        .line(item.id, 2, 1_000)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;
    factory::order::OrderFactory::new(db)
        .line(item.id, 3, 1_000)
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;
    factory::order::OrderFactory::new(db)
        .line(item.id, 10, 1_000)
        .created_at(now - Duration::days(3))
        .build()
        .await?;

    let repo = StatsRepository::new(db);
    let start = now - Duration::hours(1);
    let end = now + Duration::hours(1);

    assert_eq!(repo.revenue_between(start, end).await?, 5_000);
    assert_eq!(repo.orders_between(start, end).await?, 2);

    Ok(())
}

/// Tests the revenue of a window without orders.
///
/// Expected: 0 rather than an error
#[tokio::test]
async fn empty_window_has_zero_revenue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = StatsRepository::new(db);

    assert_eq!(
        repo.revenue_between(now - Duration::hours(1), now).await?,
        0
    );

    Ok(())
}
