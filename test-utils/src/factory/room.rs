//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::RoomType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let room = RoomFactory::new(&db)
///     .room_number(5)
///     .room_type(RoomType::Suite)
///     .nightly_price(10_000)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_number: i32,
    room_type: RoomType,
    nightly_price: i64,
    available: bool,
    description: Option<String>,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - room_number: unique auto-incremented value
    /// - room_type: `Simple`
    /// - nightly_price: `10_000`
    /// - available: `true`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            room_number: next_id() as i32,
            room_type: RoomType::Simple,
            nightly_price: 10_000,
            available: true,
            description: None,
        }
    }

    pub fn room_number(mut self, room_number: i32) -> Self {
        self.room_number = room_number;
        self
    }

    pub fn room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    pub fn nightly_price(mut self, nightly_price: i64) -> Self {
        self.nightly_price = nightly_price;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            room_number: ActiveValue::Set(self.room_number),
            room_type: ActiveValue::Set(self.room_type),
            nightly_price: ActiveValue::Set(self.nightly_price),
            available: ActiveValue::Set(self.available),
            description: ActiveValue::Set(self.description),
            photo: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available room with default values.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
