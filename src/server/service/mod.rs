//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Booking rules, validation and price computation
//! - **Orchestration**: Coordinating repository calls with the payment gateway
//! - **Transaction Management**: Grouping multi-step writes and serializing bookings per room

pub mod auth;
pub mod menu_item;
pub mod order;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod room_lock;
pub mod stats;
pub mod user;
