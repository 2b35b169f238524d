//! Room registry service.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{reservation::ReservationRepository, room::RoomRepository},
    error::AppError,
    model::{
        reservation::StayDates,
        room::{CreateRoomParams, Room, UpdateRoomParams},
    },
    service::room_lock::RoomLocks,
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a RoomLocks,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a RoomLocks) -> Self {
        Self { db, locks }
    }

    /// Creates a room with a unique, positive room number.
    ///
    /// # Returns
    /// - `Ok(Room)` - Created room
    /// - `Err(AppError::BadRequest)` - Non-positive room number or negative price
    /// - `Err(AppError::Conflict)` - Room number already used
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        validate_room_number(params.room_number)?;
        validate_price(params.nightly_price)?;

        let repo = RoomRepository::new(self.db);
        if repo.number_taken(params.room_number, None).await? {
            return Err(AppError::Conflict(format!(
                "Room number {} already exists",
                params.room_number
            )));
        }

        let room = repo.create(params).await?;

        tracing::info!("Created room {} (id {})", room.room_number, room.id);

        Ok(room)
    }

    pub async fn get_all(&self) -> Result<Vec<Room>, AppError> {
        Ok(RoomRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Room>, AppError> {
        Ok(RoomRepository::new(self.db).find_by_id(id).await?)
    }

    /// Applies a partial update while holding the room's booking lock.
    ///
    /// # Returns
    /// - `Ok(Room)` - Updated room
    /// - `Err(AppError::NotFound)` - No room with that ID
    /// - `Err(AppError::BadRequest)` - Invalid room number or price
    /// - `Err(AppError::Conflict)` - New room number already used by another room
    pub async fn update(&self, params: UpdateRoomParams) -> Result<Room, AppError> {
        if let Some(room_number) = params.room_number {
            validate_room_number(room_number)?;
        }
        if let Some(price) = params.nightly_price {
            validate_price(price)?;
        }

        let _room_guard = self.locks.lock(params.id).await;

        let repo = RoomRepository::new(self.db);
        if let Some(room_number) = params.room_number {
            if repo.number_taken(room_number, Some(params.id)).await? {
                return Err(AppError::Conflict(format!(
                    "Room number {} already exists",
                    room_number
                )));
            }
        }

        let id = params.id;
        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))
    }

    /// Deletes a room that holds no pending or confirmed reservations.
    ///
    /// Cancelled reservations of the room are removed in the same transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Room removed
    /// - `Err(AppError::NotFound)` - No room with that ID
    /// - `Err(AppError::Conflict)` - Room still has active reservations
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let _room_guard = self.locks.lock(id).await;

        let txn = self.db.begin().await?;
        let reservations = ReservationRepository::new(&txn);

        let active = reservations.count_active_for_room(id).await?;
        if active > 0 {
            return Err(AppError::Conflict(format!(
                "Room {} still has {} active reservation(s)",
                id, active
            )));
        }

        reservations.delete_for_room(id).await?;

        if !RoomRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound(format!("Room {} not found", id)));
        }

        txn.commit().await?;

        tracing::info!("Deleted room {}", id);

        Ok(())
    }

    /// Rooms flagged available with no active reservation overlapping `stay`.
    pub async fn search_available(&self, stay: &StayDates) -> Result<Vec<Room>, AppError> {
        let busy = ReservationRepository::new(self.db)
            .booked_room_ids(stay)
            .await?;

        Ok(RoomRepository::new(self.db)
            .get_available_except(busy)
            .await?)
    }
}

fn validate_room_number(room_number: i32) -> Result<(), AppError> {
    if room_number <= 0 {
        return Err(AppError::BadRequest(
            "Room number must be a positive integer".to_string(),
        ));
    }

    Ok(())
}

fn validate_price(price: i64) -> Result<(), AppError> {
    if price < 0 {
        return Err(AppError::BadRequest(
            "Nightly price must not be negative".to_string(),
        ));
    }

    Ok(())
}
