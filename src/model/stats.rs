use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TopItemDto {
    pub name: String,
    pub quantity: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RecentOrderDto {
    pub id: i32,
    pub total: i64,
    pub date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BarStatsDto {
    pub today_revenue: i64,
    pub monthly_orders: u64,
    pub top_item: Option<String>,
    pub top_items: Vec<TopItemDto>,
    pub recent_orders: Vec<RecentOrderDto>,
}
