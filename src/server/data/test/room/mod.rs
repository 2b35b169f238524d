use crate::server::{
    data::room::RoomRepository,
    model::room::{CreateRoomParams, UpdateRoomParams},
};
use entity::sea_orm_active_enums::RoomType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod set_available;
mod update;
