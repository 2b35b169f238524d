use chrono::NaiveDate;
use entity::sea_orm_active_enums::{ReservationStatus, RoomType};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{reservation::ReservationRepository, room::RoomRepository},
    error::AppError,
    model::{
        reservation::StayDates,
        room::{CreateRoomParams, UpdateRoomParams},
    },
    service::{room::RoomService, room_lock::RoomLocks},
};

mod create;
mod delete;
mod search_available;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
