//! HTTP request handlers.
//!
//! Controllers authorize the caller with `AuthGuard`, convert DTOs into domain
//! parameters, call the matching service and convert the result back into a DTO.

pub mod auth;
pub mod menu_item;
pub mod order;
pub mod reservation;
pub mod room;
pub mod stats;
pub mod user;
