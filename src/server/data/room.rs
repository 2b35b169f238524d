//! Room data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::room::{CreateRoomParams, Room, UpdateRoomParams};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new room.
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            room_number: ActiveValue::Set(params.room_number),
            room_type: ActiveValue::Set(params.room_type),
            nightly_price: ActiveValue::Set(params.nightly_price),
            available: ActiveValue::Set(params.available),
            description: ActiveValue::Set(params.description),
            photo: ActiveValue::Set(params.photo),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Checks whether a room number is used by a room other than `exclude_id`.
    pub async fn number_taken(
        &self,
        room_number: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::RoomNumber.eq(room_number));

        if let Some(id) = exclude_id {
            query = query.filter(entity::room::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Gets every room ordered by room number.
    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Gets the rooms with the given IDs. Missing IDs are skipped.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Room>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Gets rooms flagged available whose IDs are not in `busy_room_ids`.
    pub async fn get_available_except(&self, busy_room_ids: Vec<i32>) -> Result<Vec<Room>, DbErr> {
        let mut query =
            entity::prelude::Room::find().filter(entity::room::Column::Available.eq(true));

        if !busy_room_ids.is_empty() {
            query = query.filter(entity::room::Column::Id.is_not_in(busy_room_ids));
        }

        let entities = query
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Updated room
    /// - `Ok(None)` - No room with that ID
    pub async fn update(&self, params: UpdateRoomParams) -> Result<Option<Room>, DbErr> {
        let Some(existing) = entity::prelude::Room::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::room::ActiveModel = existing.into();
        if let Some(room_number) = params.room_number {
            active.room_number = ActiveValue::Set(room_number);
        }
        if let Some(room_type) = params.room_type {
            active.room_type = ActiveValue::Set(room_type);
        }
        if let Some(nightly_price) = params.nightly_price {
            active.nightly_price = ActiveValue::Set(nightly_price);
        }
        if let Some(available) = params.available {
            active.available = ActiveValue::Set(available);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(photo) = params.photo {
            active.photo = ActiveValue::Set(Some(photo));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Room::from_entity(entity)))
    }

    /// Sets the availability flag of a room.
    ///
    /// # Returns
    /// - `Ok(true)` - Room updated
    /// - `Ok(false)` - No room with that ID
    pub async fn set_available(&self, id: i32, available: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::update_many()
            .col_expr(entity::room::Column::Available, Expr::value(available))
            .filter(entity::room::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a room.
    ///
    /// # Returns
    /// - `Ok(true)` - Room deleted
    /// - `Ok(false)` - No room with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
