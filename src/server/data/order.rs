//! Bar order repository.
//!
//! Orders are always returned with their lines, and each line carries the current name
//! of its menu item. Unit prices come from the line itself, never from the menu item.

use chrono::Utc;
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::order::{NewOrder, Order, OrderLine};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order and its lines, returning the order with lines attached.
    pub async fn create(&self, params: NewOrder) -> Result<Order, DbErr> {
        let order = entity::order::ActiveModel {
            room_number: ActiveValue::Set(params.room_number),
            status: ActiveValue::Set(params.status),
            total: ActiveValue::Set(params.total),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for line in params.lines {
            entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                menu_item_id: ActiveValue::Set(line.menu_item_id),
                quantity: ActiveValue::Set(line.quantity),
                unit_price: ActiveValue::Set(line.unit_price),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        self.find_by_id(order.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Order with id {} not found after creation",
                order.id
            )))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut orders = self.attach_lines(vec![order]).await?;

        Ok(orders.pop())
    }

    /// Gets every order, newest first.
    pub async fn get_all(&self) -> Result<Vec<Order>, DbErr> {
        let orders = entity::prelude::Order::find()
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        self.attach_lines(orders).await
    }

    /// Sets the status of an order.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Updated order
    /// - `Ok(None)` - No order with that ID
    pub async fn update_status(&self, id: i32, status: OrderStatus) -> Result<Option<Order>, DbErr> {
        let Some(existing) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::order::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status);
        let order = active.update(self.db).await?;

        let mut orders = self.attach_lines(vec![order]).await?;

        Ok(orders.pop())
    }

    /// Deletes an order and its lines.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::OrderItem::delete_many()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Order::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads lines and menu item names for a batch of orders, preserving order.
    async fn attach_lines(&self, orders: Vec<entity::order::Model>) -> Result<Vec<Order>, DbErr> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        // Fetch all referenced menu items in one query
        let mut menu_item_ids: Vec<i32> = items.iter().map(|i| i.menu_item_id).collect();
        menu_item_ids.sort_unstable();
        menu_item_ids.dedup();
        let names: HashMap<i32, String> = if menu_item_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::MenuItem::find()
                .filter(entity::menu_item::Column::Id.is_in(menu_item_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| (m.id, m.name))
                .collect()
        };

        let mut lines_by_order: HashMap<i32, Vec<OrderLine>> = HashMap::new();
        for item in items {
            lines_by_order
                .entry(item.order_id)
                .or_default()
                .push(OrderLine {
                    id: item.id,
                    menu_item_id: item.menu_item_id,
                    menu_item_name: names.get(&item.menu_item_id).cloned(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                });
        }

        Ok(orders
            .into_iter()
            .map(|order| Order {
                items: lines_by_order.remove(&order.id).unwrap_or_default(),
                id: order.id,
                room_number: order.room_number,
                status: order.status,
                total: order.total,
                created_at: order.created_at,
            })
            .collect())
    }
}
