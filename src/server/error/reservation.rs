use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Violations of the booking rules.
#[derive(Error, Debug)]
pub enum ReservationError {
    /// Room exists but its availability flag is off.
    #[error("Room {0} is not available for booking")]
    RoomUnavailable(i32),

    /// Requested stay overlaps an active reservation for the same room.
    #[error("Room {room_id} is already booked between {checkin} and {checkout}")]
    BookingConflict {
        room_id: i32,
        checkin: NaiveDate,
        checkout: NaiveDate,
    },

    /// Check-out is not strictly after check-in.
    #[error("Check-out date {checkout} must be after check-in date {checkin}")]
    InvalidDateRange {
        checkin: NaiveDate,
        checkout: NaiveDate,
    },

    /// Reservation was cancelled and can no longer be changed.
    #[error("Reservation {0} is cancelled")]
    Cancelled(i32),
}

/// Converts booking errors into HTTP responses.
///
/// - `RoomUnavailable` / `BookingConflict` / `Cancelled` → 409 Conflict
/// - `InvalidDateRange` → 400 Bad Request
impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidDateRange { .. } => StatusCode::BAD_REQUEST,
            Self::RoomUnavailable(_) | Self::BookingConflict { .. } | Self::Cancelled(_) => {
                StatusCode::CONFLICT
            }
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
