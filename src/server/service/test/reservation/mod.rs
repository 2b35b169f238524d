use chrono::NaiveDate;
use entity::sea_orm_active_enums::ReservationStatus;
use test_utils::{builder::TestBuilder, factory};

use super::{AcceptingGateway, InterferingGateway, RejectingGateway};
use crate::server::{
    data::{reservation::ReservationRepository, room::RoomRepository},
    error::{payment::PaymentError, reservation::ReservationError, AppError},
    model::reservation::{CreateReservationParams, StayDates},
    service::{reservation::ReservationService, room_lock::RoomLocks},
};


fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn stay(from: NaiveDate, to: NaiveDate) -> StayDates {
    StayDates::new(from, to).unwrap()
}

fn booking(user_id: i32, room_id: i32, stay: StayDates) -> CreateReservationParams {
    CreateReservationParams {
        user_id,
        room_id,
        stay,
        phone_number: "+221770000000".to_string(),
    }
}
