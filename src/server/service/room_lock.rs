//! Per-room booking locks.
//!
//! This module provides `RoomLocks`, which serializes booking operations on the same room.
//! The conflict check reads existing reservations and then inserts a new one; holding the
//! room's lock across that check-then-act sequence (and the payment confirmation that
//! follows) guarantees two concurrent requests for one room never both pass the check.
//! Operations on different rooms do not block each other.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of one async mutex per room ID.
///
/// Cloning shares the same registry, so the value stored in `AppState` is enough for
/// every request handler.
#[derive(Clone, Default)]
pub struct RoomLocks {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

impl RoomLocks {
    /// Creates an empty lock registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for a room, waiting for any holder to release it.
    ///
    /// The registry lock is only held while looking up the room's mutex, never while
    /// waiting on it.
    ///
    /// # Arguments
    /// - `room_id` - Room to lock
    ///
    /// # Returns
    /// - `OwnedMutexGuard<()>` - Guard releasing the room when dropped
    pub async fn lock(&self, room_id: i32) -> OwnedMutexGuard<()> {
        let room_lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(room_id).or_default().clone()
        };

        room_lock.lock_owned().await
    }
}
