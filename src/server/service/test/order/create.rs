use super::*;

/// Tests an order keeps the prices it was placed with.
///
/// The menu price is raised after the order is placed; the stored total and unit
/// price must not change.
///
/// Expected: total 2 * 1500 + 1 * 4000 = 7000 before and after the price change
#[tokio::test]
async fn snapshots_unit_prices() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let beer = factory::menu_item::MenuItemFactory::new(db)
        .name("Gazelle")
        .price(1_500)
        .build()
        .await?;
    let thiebou = factory::menu_item::MenuItemFactory::new(db)
        .name("Thieboudienne")
        .category("Food")
        .price(4_000)
        .build()
        .await?;

    let service = OrderService::new(db);
    let created = service
        .create(order(12, vec![(beer.id, 2), (thiebou.id, 1)]))
        .await?;

    assert_eq!(created.total, 7_000);
    assert_eq!(created.items.len(), 2);
    assert_eq!(created.status, OrderStatus::Pending);

    MenuItemService::new(db)
        .update(UpdateMenuItemParams {
            id: beer.id,
            price: Some(2_500),
            ..Default::default()
        })
        .await?;

    let stored = service.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored.total, 7_000);
    let beer_line = stored
        .items
        .iter()
        .find(|line| line.menu_item_id == beer.id)
        .unwrap();
    assert_eq!(beer_line.unit_price, 1_500);
    assert_eq!(beer_line.menu_item_name.as_deref(), Some("Gazelle"));

    Ok(())
}

/// Tests order validation.
///
/// Expected: Err(AppError::BadRequest) for an empty order, a zero quantity, room number
/// zero, an unknown menu item and an unavailable menu item
#[tokio::test]
async fn rejects_invalid_orders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::menu_item::create_menu_item(db).await?;
    let off_menu = factory::menu_item::MenuItemFactory::new(db)
        .available(false)
        .build()
        .await?;

    let service = OrderService::new(db);

    for params in [
        order(3, vec![]),
        order(3, vec![(item.id, 0)]),
        order(0, vec![(item.id, 1)]),
        order(3, vec![(9_999, 1)]),
        order(3, vec![(off_menu.id, 1)]),
    ] {
        assert!(matches!(
            service.create(params).await,
            Err(AppError::BadRequest(_))
        ));
    }

    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests any status may follow any other.
///
/// Expected: delivered then back to preparing
#[tokio::test]
async fn updates_status_freely() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::menu_item::create_menu_item(db).await?;
    let service = OrderService::new(db);
    let created = service.create(order(4, vec![(item.id, 1)])).await?;

    let delivered = service
        .update_status(created.id, OrderStatus::Delivered)
        .await?;
    assert_eq!(delivered.status, OrderStatus::Delivered);

    let preparing = service
        .update_status(created.id, OrderStatus::Preparing)
        .await?;
    assert_eq!(preparing.status, OrderStatus::Preparing);

    assert!(matches!(
        service.update_status(9_999, OrderStatus::Ready).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
