use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum RoomTypeDto {
    Simple,
    Double,
    Suite,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: i32,
    pub room_type: RoomTypeDto,
    /// Price per night in minor currency units
    pub nightly_price: i64,
    pub available: bool,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateRoomDto {
    pub room_number: i32,
    pub room_type: RoomTypeDto,
    pub nightly_price: i64,
    #[serde(default = "default_available")]
    pub available: bool,
    pub description: Option<String>,
    pub photo: Option<String>,
}

fn default_available() -> bool {
    true
}

/// Partial room update; omitted fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateRoomDto {
    pub room_number: Option<i32>,
    pub room_type: Option<RoomTypeDto>,
    pub nightly_price: Option<i64>,
    pub available: Option<bool>,
    pub description: Option<String>,
    pub photo: Option<String>,
}

/// Stay window used to search for free rooms. Dates are `YYYY-MM-DD`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SearchRoomsDto {
    pub date_arrive: String,
    pub date_depart: String,
}
