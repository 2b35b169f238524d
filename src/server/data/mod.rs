//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository is generic over `ConnectionTrait`, so the same code runs against the
//! connection pool or inside a transaction.

pub mod access_token;
pub mod menu_item;
pub mod order;
pub mod password_reset_token;
pub mod reservation;
pub mod room;
pub mod stats;
pub mod user;
