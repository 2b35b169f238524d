//! Room domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::RoomType;

use crate::model::room::{RoomDto, RoomTypeDto};

/// Bookable hotel room.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub room_number: i32,
    pub room_type: RoomType,
    /// Price per night in minor currency units.
    pub nightly_price: i64,
    /// Cleared once a booking is paid for and restored on cancellation.
    pub available: bool,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            room_number: entity.room_number,
            room_type: entity.room_type,
            nightly_price: entity.nightly_price,
            available: entity.available,
            description: entity.description,
            photo: entity.photo,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            room_number: self.room_number,
            room_type: room_type_into_dto(self.room_type),
            nightly_price: self.nightly_price,
            available: self.available,
            description: self.description,
            photo: self.photo,
            created_at: self.created_at,
        }
    }
}

pub fn room_type_from_dto(dto: RoomTypeDto) -> RoomType {
    match dto {
        RoomTypeDto::Simple => RoomType::Simple,
        RoomTypeDto::Double => RoomType::Double,
        RoomTypeDto::Suite => RoomType::Suite,
    }
}

pub fn room_type_into_dto(room_type: RoomType) -> RoomTypeDto {
    match room_type {
        RoomType::Simple => RoomTypeDto::Simple,
        RoomType::Double => RoomTypeDto::Double,
        RoomType::Suite => RoomTypeDto::Suite,
    }
}

/// Parameters for creating a room.
#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub room_number: i32,
    pub room_type: RoomType,
    pub nightly_price: i64,
    pub available: bool,
    pub description: Option<String>,
    pub photo: Option<String>,
}

impl CreateRoomParams {
    pub fn from_dto(dto: crate::model::room::CreateRoomDto) -> Self {
        Self {
            room_number: dto.room_number,
            room_type: room_type_from_dto(dto.room_type),
            nightly_price: dto.nightly_price,
            available: dto.available,
            description: dto.description,
            photo: dto.photo,
        }
    }
}

/// Partial room update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParams {
    pub id: i32,
    pub room_number: Option<i32>,
    pub room_type: Option<RoomType>,
    pub nightly_price: Option<i64>,
    pub available: Option<bool>,
    pub description: Option<String>,
    pub photo: Option<String>,
}

impl UpdateRoomParams {
    pub fn from_dto(id: i32, dto: crate::model::room::UpdateRoomDto) -> Self {
        Self {
            id,
            room_number: dto.room_number,
            room_type: dto.room_type.map(room_type_from_dto),
            nightly_price: dto.nightly_price,
            available: dto.available,
            description: dto.description,
            photo: dto.photo,
        }
    }
}
