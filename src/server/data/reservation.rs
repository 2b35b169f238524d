//! Reservation data repository.
//!
//! Provides the `ReservationRepository` used by the booking engine. Besides plain CRUD it
//! answers the questions the conflict check asks: which active reservations of a room
//! overlap a stay, and which rooms are occupied during a stay. Active means any status
//! other than `cancelled`. Stays are half-open `[checkin, checkout)` intervals, so two
//! stays overlap when `a.checkin < b.checkout AND a.checkout > b.checkin`.

use chrono::Utc;
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::reservation::{
    NewReservation, Reservation, ReservationSearch, StayDates,
};

/// Repository providing database operations for reservations.
pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new ReservationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation. The night count is derived from the stay.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The inserted reservation
    /// - `Err(DbErr)` - Database error, including a duplicate reservation number
    pub async fn create(&self, params: NewReservation) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            room_id: ActiveValue::Set(params.room_id),
            reservation_number: ActiveValue::Set(params.reservation_number),
            booking_date: ActiveValue::Set(Utc::now()),
            checkin_date: ActiveValue::Set(params.stay.checkin()),
            checkout_date: ActiveValue::Set(params.stay.checkout()),
            duration_nights: ActiveValue::Set(params.stay.nights() as i32),
            status: ActiveValue::Set(params.status),
            payment_token: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Finds active reservations of a room whose stay overlaps `stay`.
    ///
    /// # Arguments
    /// - `room_id` - Room to check
    /// - `stay` - Requested stay
    /// - `exclude_id` - Reservation to ignore, used when rescheduling that reservation
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - Conflicting reservations, empty when the stay is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_conflicting(
        &self,
        room_id: i32,
        stay: &StayDates,
        exclude_id: Option<i32>,
    ) -> Result<Vec<Reservation>, DbErr> {
        let mut query = Self::active_overlapping(stay)
            .filter(entity::reservation::Column::RoomId.eq(room_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::reservation::Column::Id.ne(id));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets the IDs of rooms holding an active reservation that overlaps `stay`.
    pub async fn booked_room_ids(&self, stay: &StayDates) -> Result<Vec<i32>, DbErr> {
        Self::active_overlapping(stay)
            .select_only()
            .column(entity::reservation::Column::RoomId)
            .distinct()
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Marks a reservation as paid and stores the gateway token.
    pub async fn confirm(&self, id: i32, payment_token: String) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .col_expr(
                entity::reservation::Column::Status,
                Expr::value(ReservationStatus::Confirmed),
            )
            .col_expr(
                entity::reservation::Column::PaymentToken,
                Expr::value(payment_token),
            )
            .filter(entity::reservation::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn set_status(&self, id: i32, status: ReservationStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .col_expr(entity::reservation::Column::Status, Expr::value(status))
            .filter(entity::reservation::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Moves a reservation to new dates and recomputes its night count.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Updated reservation
    /// - `Ok(None)` - No reservation with that ID
    pub async fn update_stay(
        &self,
        id: i32,
        stay: &StayDates,
    ) -> Result<Option<Reservation>, DbErr> {
        let Some(existing) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::reservation::ActiveModel = existing.into();
        active.checkin_date = ActiveValue::Set(stay.checkin());
        active.checkout_date = ActiveValue::Set(stay.checkout());
        active.duration_nights = ActiveValue::Set(stay.nights() as i32);

        let entity = active.update(self.db).await?;

        Ok(Some(Reservation::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets reservations with pagination, most recent booking first.
    ///
    /// # Returns
    /// - `Ok((reservations, total))` - Page of reservations and the total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Reservation>, u64), DbErr> {
        let paginator = entity::prelude::Reservation::find()
            .order_by_desc(entity::reservation::Column::BookingDate)
            .order_by_desc(entity::reservation::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Reservation::from_entity).collect(),
            total,
        ))
    }

    /// Gets every reservation of a user ordered by check-in date.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_asc(entity::reservation::Column::CheckinDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Searches reservations by date window and/or user. Cancelled rows are included.
    ///
    /// A reservation matches the window when the guest sleeps there on at least one of its
    /// days, so the check-out day itself does not count.
    pub async fn search(&self, search: &ReservationSearch) -> Result<Vec<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find();

        if let Some(window) = search.window {
            query = query
                .filter(entity::reservation::Column::CheckinDate.lte(window.end()))
                .filter(entity::reservation::Column::CheckoutDate.gt(window.start()));
        }

        if let Some(user_id) = search.user_id {
            query = query.filter(entity::reservation::Column::UserId.eq(user_id));
        }

        let entities = query
            .order_by_asc(entity::reservation::Column::CheckinDate)
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Counts active reservations that reference a room.
    pub async fn count_active_for_room(&self, room_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .filter(entity::reservation::Column::Status.ne(ReservationStatus::Cancelled))
            .count(self.db)
            .await
    }

    /// Counts active reservations made by a user.
    pub async fn count_active_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .filter(entity::reservation::Column::Status.ne(ReservationStatus::Cancelled))
            .count(self.db)
            .await
    }

    /// Deletes every reservation of a room. Callers check for active ones first.
    pub async fn delete_for_room(&self, room_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::delete_many()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every reservation of a user. Callers check for active ones first.
    pub async fn delete_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::delete_many()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    fn active_overlapping(stay: &StayDates) -> Select<entity::reservation::Entity> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Status.ne(ReservationStatus::Cancelled))
            .filter(entity::reservation::Column::CheckinDate.lt(stay.checkout()))
            .filter(entity::reservation::Column::CheckoutDate.gt(stay.checkin()))
    }
}
