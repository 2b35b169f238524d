use crate::server::{
    data::reservation::ReservationRepository,
    model::reservation::{DateWindow, NewReservation, ReservationSearch, StayDates},
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod booked_room_ids;
mod find_conflicting;
mod update_stay;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn stay(from: NaiveDate, to: NaiveDate) -> StayDates {
    StayDates::new(from, to).unwrap()
}
