//! SeaORM entity definitions for the hotel booking and bar ordering schema.

pub mod prelude;

pub mod access_token;
pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod password_reset_token;
pub mod reservation;
pub mod room;
pub mod sea_orm_active_enums;
pub mod user;
