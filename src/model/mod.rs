//! Request and response DTOs shared by the HTTP API.

pub mod api;
pub mod menu_item;
pub mod order;
pub mod reservation;
pub mod room;
pub mod stats;
pub mod user;
