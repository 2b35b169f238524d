use super::*;

/// Tests inserting an order with lines.
///
/// Expected: order returned with both lines and menu item names attached
#[tokio::test]
async fn creates_order_with_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let beer = factory::menu_item::MenuItemFactory::new(db)
        .name("Beer")
        .price(1_500)
        .build()
        .await?;
    let juice = factory::menu_item::MenuItemFactory::new(db)
        .name("Juice")
        .price(1_000)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(NewOrder {
            room_number: 12,
            status: OrderStatus::Pending,
            total: 4_000,
            lines: vec![
                PricedLine {
                    menu_item_id: beer.id,
                    quantity: 2,
                    unit_price: 1_500,
                },
                PricedLine {
                    menu_item_id: juice.id,
                    quantity: 1,
                    unit_price: 1_000,
                },
            ],
        })
        .await?;

    assert_eq!(order.room_number, 12);
    assert_eq!(order.total, 4_000);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].menu_item_name.as_deref(), Some("Beer"));
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.items[1].menu_item_name.as_deref(), Some("Juice"));

    Ok(())
}
