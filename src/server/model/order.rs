//! Bar order domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::OrderStatus;

use crate::model::order::{CreateOrderDto, OrderDto, OrderItemDto, OrderStatusDto};

/// Line of an order with the unit price captured at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub id: i32,
    pub menu_item_id: i32,
    /// Name of the referenced menu item, if it still exists.
    pub menu_item_name: Option<String>,
    pub quantity: i32,
    pub unit_price: i64,
}

impl OrderLine {
    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            menu_item_id: self.menu_item_id,
            menu_item_name: self.menu_item_name,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub room_number: i32,
    pub status: OrderStatus,
    pub total: i64,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderLine>,
}

impl Order {
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            room_number: self.room_number,
            status: status_into_dto(self.status),
            total: self.total,
            created_at: self.created_at,
            items: self.items.into_iter().map(OrderLine::into_dto).collect(),
        }
    }
}

pub fn status_from_dto(dto: OrderStatusDto) -> OrderStatus {
    match dto {
        OrderStatusDto::Pending => OrderStatus::Pending,
        OrderStatusDto::Preparing => OrderStatus::Preparing,
        OrderStatusDto::Ready => OrderStatus::Ready,
        OrderStatusDto::Delivered => OrderStatus::Delivered,
    }
}

pub fn status_into_dto(status: OrderStatus) -> OrderStatusDto {
    match status {
        OrderStatus::Pending => OrderStatusDto::Pending,
        OrderStatus::Preparing => OrderStatusDto::Preparing,
        OrderStatus::Ready => OrderStatusDto::Ready,
        OrderStatus::Delivered => OrderStatusDto::Delivered,
    }
}

/// Requested line: which menu item and how many.
#[derive(Debug, Clone, Copy)]
pub struct RequestedLine {
    pub menu_item_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub room_number: i32,
    pub status: OrderStatus,
    pub items: Vec<RequestedLine>,
}

impl CreateOrderParams {
    pub fn from_dto(dto: CreateOrderDto) -> Self {
        Self {
            room_number: dto.room_number,
            status: dto
                .status
                .map(status_from_dto)
                .unwrap_or(OrderStatus::Pending),
            items: dto
                .items
                .into_iter()
                .map(|item| RequestedLine {
                    menu_item_id: item.menu_item_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

/// Priced line ready to be inserted.
#[derive(Debug, Clone, Copy)]
pub struct PricedLine {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
}

/// Order ready to be inserted, with the total already computed.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub room_number: i32,
    pub status: OrderStatus,
    pub total: i64,
    pub lines: Vec<PricedLine>,
}
