//! Reservation factory for creating test reservation entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// The duration is always derived from the configured stay dates.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(&db, user.id, room.id)
///     .stay(checkin, checkout)
///     .status(ReservationStatus::Confirmed)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    room_id: i32,
    reservation_number: String,
    checkin_date: NaiveDate,
    checkout_date: NaiveDate,
    status: ReservationStatus,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - reservation_number: `"RES-{id}"`
    /// - checkin_date: 30 days from today
    /// - checkout_date: 32 days from today
    /// - status: `Confirmed`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, room_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            user_id,
            room_id,
            reservation_number: format!("RES-{}", next_id()),
            checkin_date: today + Duration::days(30),
            checkout_date: today + Duration::days(32),
            status: ReservationStatus::Confirmed,
        }
    }

    /// Sets the check-in and check-out dates.
    pub fn stay(mut self, checkin_date: NaiveDate, checkout_date: NaiveDate) -> Self {
        self.checkin_date = checkin_date;
        self.checkout_date = checkout_date;
        self
    }

    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn reservation_number(mut self, reservation_number: impl Into<String>) -> Self {
        self.reservation_number = reservation_number.into();
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let nights = (self.checkout_date - self.checkin_date).num_days() as i32;

        entity::reservation::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            room_id: ActiveValue::Set(self.room_id),
            reservation_number: ActiveValue::Set(self.reservation_number),
            booking_date: ActiveValue::Set(Utc::now()),
            checkin_date: ActiveValue::Set(self.checkin_date),
            checkout_date: ActiveValue::Set(self.checkout_date),
            duration_nights: ActiveValue::Set(nights),
            status: ActiveValue::Set(self.status),
            payment_token: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed reservation with default dates.
pub async fn create_reservation(
    db: &DatabaseConnection,
    user_id: i32,
    room_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, user_id, room_id).build().await
}
