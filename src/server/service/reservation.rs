//! Reservation engine.
//!
//! Books rooms, reschedules and cancels reservations. A booking runs in two phases while
//! the room's lock from `RoomLocks` is held:
//!
//! 1. In one transaction: re-read the room, reject it when unavailable, reject overlapping
//!    active reservations, insert the reservation as `pending_payment`.
//! 2. Ask the payment gateway for a hosted checkout. On success, in a second transaction,
//!    confirm the reservation and clear the room's availability flag. On failure, mark the
//!    reservation `cancelled` so it never blocks the room, and leave the room untouched.

use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{reservation::ReservationRepository, room::RoomRepository, user::UserRepository},
    error::{internal::InternalError, reservation::ReservationError, AppError},
    model::{
        payment::{Payer, PaymentRequest},
        reservation::{
            BookingOutcome, CreateReservationParams, NewReservation, PaginatedReservations,
            Reservation, ReservationSearch, ReservationWithDetails, StayDates,
        },
    },
    service::{payment::PaymentGateway, room_lock::RoomLocks},
    util::parse::split_full_name,
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    payment: &'a dyn PaymentGateway,
    locks: &'a RoomLocks,
}

impl<'a> ReservationService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        payment: &'a dyn PaymentGateway,
        locks: &'a RoomLocks,
    ) -> Self {
        Self { db, payment, locks }
    }

    /// Books a room and opens a hosted payment for the stay.
    ///
    /// # Arguments
    /// - `params` - Booking user, room, validated stay and payer phone number
    ///
    /// # Returns
    /// - `Ok(BookingOutcome)` - Confirmed reservation, amount charged and payment redirect URL
    /// - `Err(AppError::NotFound)` - User or room does not exist
    /// - `Err(AppError::ReservationErr(RoomUnavailable))` - Room availability flag is off
    /// - `Err(AppError::ReservationErr(BookingConflict))` - Stay overlaps an active reservation
    /// - `Err(AppError::PaymentErr)` - Gateway failed; the reservation is left `cancelled`
    /// - `Err(AppError::DbErr)` - Confirmation failed after the gateway issued a token
    ///
    /// Two failures leave the row in `pending_payment`, blocking its dates: marking it
    /// `cancelled` after a gateway error, and the confirmation transaction after a token was
    /// issued. Both are logged at error level with the reservation number and, for the
    /// latter, the gateway token. Once the payment state is checked with the provider, an
    /// admin releases the dates with `DELETE /reservation/{id}`.
    pub async fn create(&self, params: CreateReservationParams) -> Result<BookingOutcome, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(params.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))?;

        let _room_guard = self.locks.lock(params.room_id).await;

        let txn = self.db.begin().await?;

        let room = RoomRepository::new(&txn)
            .find_by_id(params.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", params.room_id)))?;

        if !room.available {
            return Err(ReservationError::RoomUnavailable(room.id).into());
        }

        ensure_no_conflict(&txn, room.id, &params.stay, None).await?;

        let nights = params.stay.nights();
        let total_amount = room.nightly_price.checked_mul(nights).ok_or_else(|| {
            InternalError::AmountOverflow(format!("{} x {} nights", room.nightly_price, nights))
        })?;

        let reservation = ReservationRepository::new(&txn)
            .create(NewReservation {
                user_id: user.id,
                room_id: room.id,
                reservation_number: uuid::Uuid::new_v4().to_string(),
                stay: params.stay,
                status: ReservationStatus::PendingPayment,
            })
            .await?;

        txn.commit().await?;

        let (first_name, last_name) = split_full_name(&user.name);
        let request = PaymentRequest {
            amount: total_amount,
            reference: reservation.reservation_number.clone(),
            description: format!(
                "Room {} from {} to {} ({} nights)",
                room.room_number,
                params.stay.checkin(),
                params.stay.checkout(),
                nights
            ),
            payer: Payer {
                first_name,
                last_name,
                phone_number: params.phone_number,
            },
        };

        let session = match self.payment.create_session(request).await {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(
                    "Payment failed for reservation {}, cancelling it: {}",
                    reservation.reservation_number,
                    err
                );

                if let Err(db_err) = ReservationRepository::new(self.db)
                    .set_status(reservation.id, ReservationStatus::Cancelled)
                    .await
                {
                    tracing::error!(
                        "Reservation {} (id {}) left pending_payment: payment failed ({}) and \
                         cancelling it failed ({}); cancel it manually",
                        reservation.reservation_number,
                        reservation.id,
                        err,
                        db_err
                    );
                }

                return Err(err.into());
            }
        };

        if let Err(db_err) = self
            .confirm_booking(reservation.id, room.id, session.token.clone())
            .await
        {
            tracing::error!(
                "Reservation {} (id {}) left pending_payment: gateway issued token {} but \
                 confirming failed ({}); check the payment and cancel it manually",
                reservation.reservation_number,
                reservation.id,
                session.token,
                db_err
            );

            return Err(db_err.into());
        }

        let reservation = ReservationRepository::new(self.db)
            .find_by_id(reservation.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found after booking".to_string()))?;

        tracing::info!(
            "Reservation {} confirmed for room {} ({} nights, {})",
            reservation.reservation_number,
            room.room_number,
            nights,
            total_amount
        );

        Ok(BookingOutcome {
            reservation,
            redirect_url: session.redirect_url,
            total_amount,
        })
    }

    /// Stores the gateway token and takes the room off the market in one transaction.
    async fn confirm_booking(&self, id: i32, room_id: i32, token: String) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;
        ReservationRepository::new(&txn).confirm(id, token).await?;
        RoomRepository::new(&txn).set_available(room_id, false).await?;
        txn.commit().await
    }

    /// Cancels a reservation: restores the room's availability and deletes the row.
    ///
    /// Both writes happen in one transaction. Reservations already marked `cancelled`
    /// never held the room, so only the row is removed for them.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation removed
    /// - `Err(AppError::NotFound)` - No reservation with that ID
    pub async fn cancel(&self, id: i32) -> Result<(), AppError> {
        let reservation = self.require(id).await?;

        let _room_guard = self.locks.lock(reservation.room_id).await;

        let txn = self.db.begin().await?;
        let repo = ReservationRepository::new(&txn);

        // Re-read under the lock, a concurrent cancel may already have removed it
        let reservation = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if reservation.is_active() {
            RoomRepository::new(&txn)
                .set_available(reservation.room_id, true)
                .await?;
        }

        repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!(
            "Reservation {} cancelled, room {} released",
            reservation.reservation_number,
            reservation.room_id
        );

        Ok(())
    }

    /// Moves a reservation to new dates after re-running the conflict check.
    ///
    /// The reservation itself is excluded from the check so a stay can be shortened or
    /// shifted within its own dates.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Rescheduled reservation with recomputed night count
    /// - `Err(AppError::NotFound)` - No reservation with that ID
    /// - `Err(AppError::ReservationErr(Cancelled))` - Reservation was cancelled
    /// - `Err(AppError::ReservationErr(BookingConflict))` - New stay overlaps another booking
    pub async fn update_dates(&self, id: i32, stay: StayDates) -> Result<Reservation, AppError> {
        let reservation = self.require(id).await?;

        let _room_guard = self.locks.lock(reservation.room_id).await;

        let txn = self.db.begin().await?;
        let repo = ReservationRepository::new(&txn);

        let reservation = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        if !reservation.is_active() {
            return Err(ReservationError::Cancelled(id).into());
        }

        ensure_no_conflict(&txn, reservation.room_id, &stay, Some(id)).await?;

        let updated = repo
            .update_stay(id, &stay)
            .await?
            .ok_or_else(|| not_found(id))?;

        txn.commit().await?;

        Ok(updated)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db).find_by_id(id).await?)
    }

    /// Gets reservations with pagination, joined with room and user.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedReservations, AppError> {
        let (reservations, total) = ReservationRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedReservations {
            reservations: self.with_details(reservations).await?,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets every reservation of a user, joined with room and user.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<ReservationWithDetails>, AppError> {
        let reservations = ReservationRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        self.with_details(reservations).await
    }

    /// Searches reservations by date window and/or user.
    pub async fn search(
        &self,
        search: ReservationSearch,
    ) -> Result<Vec<ReservationWithDetails>, AppError> {
        let reservations = ReservationRepository::new(self.db).search(&search).await?;

        self.with_details(reservations).await
    }

    async fn require(&self, id: i32) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Attaches rooms and users to reservations with one query per table.
    async fn with_details(
        &self,
        reservations: Vec<Reservation>,
    ) -> Result<Vec<ReservationWithDetails>, AppError> {
        let mut room_ids: Vec<i32> = reservations.iter().map(|r| r.room_id).collect();
        room_ids.sort_unstable();
        room_ids.dedup();
        let mut user_ids: Vec<i32> = reservations.iter().map(|r| r.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let rooms: HashMap<_, _> = RoomRepository::new(self.db)
            .find_by_ids(room_ids)
            .await?
            .into_iter()
            .map(|room| (room.id, room))
            .collect();
        let users: HashMap<_, _> = UserRepository::new(self.db)
            .find_by_ids(user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        Ok(reservations
            .into_iter()
            .map(|reservation| ReservationWithDetails {
                room: rooms.get(&reservation.room_id).cloned(),
                user: users.get(&reservation.user_id).cloned(),
                reservation,
            })
            .collect())
    }
}

/// Fails with `BookingConflict` when an active reservation of the room overlaps `stay`.
async fn ensure_no_conflict<C: ConnectionTrait>(
    db: &C,
    room_id: i32,
    stay: &StayDates,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let conflicts = ReservationRepository::new(db)
        .find_conflicting(room_id, stay, exclude_id)
        .await?;

    if let Some(existing) = conflicts.first() {
        tracing::debug!(
            "Stay {} to {} for room {} conflicts with reservation {}",
            stay.checkin(),
            stay.checkout(),
            room_id,
            existing.reservation_number
        );

        return Err(ReservationError::BookingConflict {
            room_id,
            checkin: existing.checkin_date,
            checkout: existing.checkout_date,
        }
        .into());
    }

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Reservation {} not found", id))
}
