//! Bar statistics domain model.

use chrono::{DateTime, Utc};

use crate::model::stats::{BarStatsDto, RecentOrderDto, TopItemDto};

#[derive(Debug, Clone, PartialEq)]
pub struct TopItem {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentOrder {
    pub id: i32,
    pub total: i64,
    pub date: DateTime<Utc>,
}

/// Aggregate view over all bar orders.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStats {
    /// Sum of order totals created during the current UTC day.
    pub today_revenue: i64,
    /// Number of orders created during the current UTC month.
    pub monthly_orders: u64,
    /// Menu item with the highest quantity sold.
    pub top_item: Option<String>,
    /// Up to five best sellers by quantity.
    pub top_items: Vec<TopItem>,
    /// Five most recently created orders.
    pub recent_orders: Vec<RecentOrder>,
}

impl BarStats {
    pub fn into_dto(self) -> BarStatsDto {
        BarStatsDto {
            today_revenue: self.today_revenue,
            monthly_orders: self.monthly_orders,
            top_item: self.top_item,
            top_items: self
                .top_items
                .into_iter()
                .map(|item| TopItemDto {
                    name: item.name,
                    quantity: item.quantity,
                })
                .collect(),
            recent_orders: self
                .recent_orders
                .into_iter()
                .map(|order| RecentOrderDto {
                    id: order.id,
                    total: order.total,
                    date: order.date,
                })
                .collect(),
        }
    }
}
