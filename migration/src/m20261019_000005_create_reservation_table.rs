use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261019_000001_create_user_table::User, m20261019_000004_create_room_table::Room};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::UserId))
                    .col(integer(Reservation::RoomId))
                    .col(string_uniq(Reservation::ReservationNumber))
                    .col(
                        timestamp_with_time_zone(Reservation::BookingDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(date(Reservation::CheckinDate))
                    .col(date(Reservation::CheckoutDate))
                    .col(integer(Reservation::DurationNights))
                    .col(string(Reservation::Status))
                    .col(string_null(Reservation::PaymentToken))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user_id")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Conflict checks scan a room's stays by date
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_room_dates")
                    .table(Reservation::Table)
                    .col(Reservation::RoomId)
                    .col(Reservation::CheckinDate)
                    .col(Reservation::CheckoutDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    UserId,
    RoomId,
    ReservationNumber,
    BookingDate,
    CheckinDate,
    CheckoutDate,
    DurationNights,
    Status,
    PaymentToken,
}
