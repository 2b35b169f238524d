//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Payment gateway used when booking rooms
//! - Per-room locks serializing concurrent bookings

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{payment::PaymentGateway, room_lock::RoomLocks};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn PaymentGateway>` is a reference-counted pointer
/// - `RoomLocks` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Payment provider creating hosted checkouts for reservations.
    pub payment: Arc<dyn PaymentGateway>,

    /// Locks serializing the conflict check and insert of bookings per room.
    pub room_locks: RoomLocks,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `payment` - Payment gateway implementation
    /// - `room_locks` - Booking lock registry
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        payment: Arc<dyn PaymentGateway>,
        room_locks: RoomLocks,
    ) -> Self {
        Self {
            db,
            payment,
            room_locks,
        }
    }
}
