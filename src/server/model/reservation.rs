//! Reservation domain models and parameters.
//!
//! `StayDates` is the validated check-in/check-out pair every booking operation works
//! with. It guarantees check-out is strictly after check-in, so the derived night count
//! is always at least one. `DateWindow` is the inclusive day range reservation searches
//! filter on.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::ReservationStatus;

use crate::{
    model::reservation::{
        PaginatedReservationsDto, ReservationDetailDto, ReservationDto, ReservationStatusDto,
    },
    server::{
        error::{reservation::ReservationError, AppError},
        model::{room::Room, user::User},
        util::parse::parse_date,
    },
};

/// Half-open stay interval `[checkin, checkout)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    checkin: NaiveDate,
    checkout: NaiveDate,
}

impl StayDates {
    /// Builds a stay, rejecting ranges where check-out is not after check-in.
    pub fn new(checkin: NaiveDate, checkout: NaiveDate) -> Result<Self, ReservationError> {
        if checkout <= checkin {
            return Err(ReservationError::InvalidDateRange { checkin, checkout });
        }

        Ok(Self { checkin, checkout })
    }

    /// Parses `YYYY-MM-DD` arrival and departure strings into a stay.
    ///
    /// # Returns
    /// - `Ok(StayDates)` - Both dates parsed and the range is valid
    /// - `Err(AppError::BadRequest)` - A date failed to parse
    /// - `Err(AppError::ReservationErr(InvalidDateRange))` - Departure not after arrival
    pub fn parse(arrive: &str, depart: &str) -> Result<Self, AppError> {
        let checkin = parse_date("date_arrive", arrive)?;
        let checkout = parse_date("date_depart", depart)?;

        Ok(Self::new(checkin, checkout)?)
    }

    pub fn checkin(&self) -> NaiveDate {
        self.checkin
    }

    pub fn checkout(&self) -> NaiveDate {
        self.checkout
    }

    /// Whole nights between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.checkout - self.checkin).num_days()
    }
}

/// Inclusive range of calendar days `[start, end]`. A single day is a valid window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if end < start {
            return Err(AppError::BadRequest(format!(
                "end_date {} is before start_date {}",
                end, start
            )));
        }

        Ok(Self { start, end })
    }

    /// Parses `YYYY-MM-DD` `start_date` and `end_date` query values.
    ///
    /// # Returns
    /// - `Ok(DateWindow)` - Both dates parsed and `end_date` is not before `start_date`
    /// - `Err(AppError::BadRequest)` - A date failed to parse or the range is reversed
    pub fn parse(start: &str, end: &str) -> Result<Self, AppError> {
        Self::new(
            parse_date("start_date", start)?,
            parse_date("end_date", end)?,
        )
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Booking of a room by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub reservation_number: String,
    pub booking_date: DateTime<Utc>,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub duration_nights: i32,
    pub status: ReservationStatus,
    pub payment_token: Option<String>,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            room_id: entity.room_id,
            reservation_number: entity.reservation_number,
            booking_date: entity.booking_date,
            checkin_date: entity.checkin_date,
            checkout_date: entity.checkout_date,
            duration_nights: entity.duration_nights,
            status: entity.status,
            payment_token: entity.payment_token,
        }
    }

    /// Whether this reservation still occupies its room.
    pub fn is_active(&self) -> bool {
        self.status != ReservationStatus::Cancelled
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            user_id: self.user_id,
            room_id: self.room_id,
            reservation_number: self.reservation_number,
            booking_date: self.booking_date,
            checkin_date: self.checkin_date,
            checkout_date: self.checkout_date,
            duration_nights: self.duration_nights,
            status: status_into_dto(self.status),
        }
    }
}

fn status_into_dto(status: ReservationStatus) -> ReservationStatusDto {
    match status {
        ReservationStatus::PendingPayment => ReservationStatusDto::PendingPayment,
        ReservationStatus::Confirmed => ReservationStatusDto::Confirmed,
        ReservationStatus::Cancelled => ReservationStatusDto::Cancelled,
    }
}

/// Reservation joined with its room and user.
///
/// Either side may be missing if the referenced row was removed out of band.
#[derive(Debug, Clone)]
pub struct ReservationWithDetails {
    pub reservation: Reservation,
    pub room: Option<Room>,
    pub user: Option<User>,
}

impl ReservationWithDetails {
    pub fn into_dto(self) -> ReservationDetailDto {
        ReservationDetailDto {
            reservation: self.reservation.into_dto(),
            room: self.room.map(Room::into_dto),
            user: self.user.map(User::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedReservations {
    pub reservations: Vec<ReservationWithDetails>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedReservations {
    pub fn into_dto(self) -> PaginatedReservationsDto {
        PaginatedReservationsDto {
            reservations: self
                .reservations
                .into_iter()
                .map(ReservationWithDetails::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for booking a room.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub user_id: i32,
    pub room_id: i32,
    pub stay: StayDates,
    /// Payer phone number forwarded to the payment gateway.
    pub phone_number: String,
}

/// Parameters for inserting a reservation row.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub user_id: i32,
    pub room_id: i32,
    pub reservation_number: String,
    pub stay: StayDates,
    pub status: ReservationStatus,
}

/// Result of a successful booking: the confirmed reservation and where to pay.
#[derive(Debug, Clone)]
pub struct BookingOutcome {
    pub reservation: Reservation,
    pub redirect_url: String,
    pub total_amount: i64,
}

/// Reservation search filters. Both are optional and combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ReservationSearch {
    /// Match reservations with a night on any day of this window.
    pub window: Option<DateWindow>,
    pub user_id: Option<i32>,
}
