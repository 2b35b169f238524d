use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{room::RoomDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatusDto {
    PendingPayment,
    Confirmed,
    Cancelled,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub reservation_number: String,
    pub booking_date: DateTime<Utc>,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub duration_nights: i32,
    pub status: ReservationStatusDto,
}

/// Reservation joined with the booked room and the booking user.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ReservationDetailDto {
    #[serde(flatten)]
    pub reservation: ReservationDto,
    pub room: Option<RoomDto>,
    pub user: Option<UserDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PaginatedReservationsDto {
    pub reservations: Vec<ReservationDetailDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Booking request. Dates are `YYYY-MM-DD`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateReservationDto {
    pub user_id: i32,
    pub chambre_id: i32,
    pub date_arrive: String,
    pub date_depart: String,
    pub phone_number: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateReservationResponseDto {
    pub success: bool,
    pub redirect_url: String,
    /// Amount charged in minor currency units
    pub total_amount: i64,
    pub reservation: ReservationDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateReservationDto {
    pub date_arrive: String,
    pub date_depart: String,
}

/// Filters for `/search_reservations`. `start_date` and `end_date` must be given together.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SearchReservationsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub user_id: Option<i32>,
}
