//! Order factory for creating test orders together with their line items.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders.
///
/// Lines are `(menu_item_id, quantity, unit_price)`; the order total is computed from them.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db)
///     .line(beer.id, 2, beer.price)
///     .created_at(yesterday)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    room_number: i32,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    lines: Vec<(i32, i32, i64)>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory for room 1, pending, created now, with no lines.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            room_number: 1,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            lines: Vec::new(),
        }
    }

    pub fn room_number(mut self, room_number: i32) -> Self {
        self.room_number = room_number;
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Adds a line item to the order.
    pub fn line(mut self, menu_item_id: i32, quantity: i32, unit_price: i64) -> Self {
        self.lines.push((menu_item_id, quantity, unit_price));
        self
    }

    /// Builds and inserts the order and its lines into the database.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let total = self
            .lines
            .iter()
            .map(|(_, quantity, unit_price)| *quantity as i64 * unit_price)
            .sum();

        let order = entity::order::ActiveModel {
            room_number: ActiveValue::Set(self.room_number),
            status: ActiveValue::Set(self.status),
            total: ActiveValue::Set(total),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (menu_item_id, quantity, unit_price) in self.lines {
            entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                menu_item_id: ActiveValue::Set(menu_item_id),
                quantity: ActiveValue::Set(quantity),
                unit_price: ActiveValue::Set(unit_price),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(order)
    }
}

/// Creates a pending order with a single line of `quantity` units of the menu item.
pub async fn create_order(
    db: &DatabaseConnection,
    menu_item: &entity::menu_item::Model,
    quantity: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db)
        .line(menu_item.id, quantity, menu_item.price)
        .build()
        .await
}
