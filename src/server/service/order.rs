//! Bar order service.
//!
//! Each line's unit price is copied from its menu item when the order is placed and
//! the order total is computed from those snapshots. Later menu price changes never
//! touch existing orders.

use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{menu_item::MenuItemRepository, order::OrderRepository},
    error::{internal::InternalError, AppError},
    model::{
        menu_item::MenuItem,
        order::{CreateOrderParams, NewOrder, Order, PricedLine, RequestedLine},
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order for a room.
    ///
    /// # Returns
    /// - `Ok(Order)` - Created order with priced lines
    /// - `Err(AppError::BadRequest)` - Empty order, bad quantity or room number, or a
    ///   menu item that does not exist or is unavailable
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        if params.room_number <= 0 {
            return Err(AppError::BadRequest(
                "Room number must be a positive integer".to_string(),
            ));
        }
        if params.items.is_empty() {
            return Err(AppError::BadRequest(
                "An order needs at least one item".to_string(),
            ));
        }
        if let Some(line) = params.items.iter().find(|line| line.quantity < 1) {
            return Err(AppError::BadRequest(format!(
                "Quantity for menu item {} must be at least 1",
                line.menu_item_id
            )));
        }

        let txn = self.db.begin().await?;

        let ids: Vec<i32> = params.items.iter().map(|line| line.menu_item_id).collect();
        let menu: HashMap<i32, MenuItem> = MenuItemRepository::new(&txn)
            .find_by_ids(ids)
            .await?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();

        let lines = price_lines(&params.items, &menu)?;
        let total = order_total(&lines)?;

        let order = OrderRepository::new(&txn)
            .create(NewOrder {
                room_number: params.room_number,
                status: params.status,
                total,
                lines,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Order {} placed for room {} ({})",
            order.id,
            order.room_number,
            order.total
        );

        Ok(order)
    }

    /// All orders, newest first
    pub async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        Ok(OrderRepository::new(self.db).find_by_id(id).await?)
    }

    /// Sets the order status. Any status may follow any other.
    pub async fn update_status(&self, id: i32, status: OrderStatus) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !OrderRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound(format!("Order {} not found", id)));
        }

        txn.commit().await?;

        Ok(())
    }
}

/// Snapshots the current price of each requested menu item.
fn price_lines(
    requested: &[RequestedLine],
    menu: &HashMap<i32, MenuItem>,
) -> Result<Vec<PricedLine>, AppError> {
    requested
        .iter()
        .map(|line| {
            let item = menu.get(&line.menu_item_id).ok_or_else(|| {
                AppError::BadRequest(format!("Menu item {} does not exist", line.menu_item_id))
            })?;

            if !item.available {
                return Err(AppError::BadRequest(format!(
                    "Menu item {} is not available",
                    item.name
                )));
            }

            Ok(PricedLine {
                menu_item_id: item.id,
                quantity: line.quantity,
                unit_price: item.price,
            })
        })
        .collect()
}

/// Sum of `quantity * unit_price` over all lines.
fn order_total(lines: &[PricedLine]) -> Result<i64, InternalError> {
    lines.iter().try_fold(0i64, |total, line| {
        i64::from(line.quantity)
            .checked_mul(line.unit_price)
            .and_then(|amount| total.checked_add(amount))
            .ok_or_else(|| InternalError::AmountOverflow("order total".to_string()))
    })
}
