//! Read-only aggregate queries over bar orders.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct StatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sums order totals created in `[start, end)`.
    pub async fn revenue_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, DbErr> {
        let sum = entity::prelude::Order::find()
            .select_only()
            .column_as(entity::order::Column::Total.sum(), "revenue")
            .filter(entity::order::Column::CreatedAt.gte(start))
            .filter(entity::order::Column::CreatedAt.lt(end))
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;

        Ok(sum.flatten().unwrap_or(0))
    }

    /// Counts orders created in `[start, end)`.
    pub async fn orders_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CreatedAt.gte(start))
            .filter(entity::order::Column::CreatedAt.lt(end))
            .count(self.db)
            .await
    }

    /// Total quantity ordered per menu item, as `(menu_item_id, quantity)`.
    pub async fn quantity_by_menu_item(&self) -> Result<Vec<(i32, i64)>, DbErr> {
        let rows = entity::prelude::OrderItem::find()
            .select_only()
            .column(entity::order_item::Column::MenuItemId)
            .column_as(entity::order_item::Column::Quantity.sum(), "quantity")
            .group_by(entity::order_item::Column::MenuItemId)
            .into_tuple::<(i32, Option<i64>)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(menu_item_id, quantity)| (menu_item_id, quantity.unwrap_or(0)))
            .collect())
    }

    /// Most recently created orders.
    pub async fn recent_orders(&self, limit: u64) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
