use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatusDto {
    Pending,
    Preparing,
    Ready,
    Delivered,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OrderItemDto {
    pub id: i32,
    pub menu_item_id: i32,
    pub menu_item_name: Option<String>,
    pub quantity: i32,
    /// Price per unit captured when the order was placed
    pub unit_price: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub room_number: i32,
    pub status: OrderStatusDto,
    pub total: i64,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateOrderItemDto {
    pub menu_item_id: i32,
    pub quantity: i32,
}

/// New bar order. The total is always computed server-side.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateOrderDto {
    #[serde(rename = "roomNumber", alias = "room_number")]
    pub room_number: i32,
    pub status: Option<OrderStatusDto>,
    pub items: Vec<CreateOrderItemDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateOrderStatusDto {
    pub status: OrderStatusDto,
}
