use super::*;

async fn seed(
    db: &sea_orm::DatabaseConnection,
    status: ReservationStatus,
) -> Result<(entity::room::Model, entity::reservation::Model), DbErr> {
    let user = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;
    let reservation = factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .stay(date(2025, 2, 1), date(2025, 2, 5))
        .status(status)
        .build()
        .await?;

    Ok((room, reservation))
}

/// Tests detecting a partially overlapping stay.
///
/// Existing stay 2025-02-01 → 2025-02-05, requested 2025-02-03 → 2025-02-06.
///
/// Expected: the existing reservation is reported
#[tokio::test]
async fn finds_partial_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, existing) = seed(db, ReservationStatus::Confirmed).await?;

    let repo = ReservationRepository::new(db);
    let conflicts = repo
        .find_conflicting(room.id, &stay(date(2025, 2, 3), date(2025, 2, 6)), None)
        .await?;

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].id, existing.id);

    Ok(())
}

/// Tests detecting a stay that fully contains an existing one.
///
/// Neither endpoint of the request falls inside the existing stay.
///
/// Expected: the existing reservation is reported
#[tokio::test]
async fn finds_containing_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, _) = seed(db, ReservationStatus::Confirmed).await?;

    let repo = ReservationRepository::new(db);
    let conflicts = repo
        .find_conflicting(room.id, &stay(date(2025, 1, 20), date(2025, 2, 20)), None)
        .await?;

    assert_eq!(conflicts.len(), 1);

    Ok(())
}

/// Tests that back-to-back stays do not conflict.
///
/// Expected: no conflicts when the request starts on the existing checkout day
#[tokio::test]
async fn allows_back_to_back_stay() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, _) = seed(db, ReservationStatus::Confirmed).await?;

    let repo = ReservationRepository::new(db);
    let after = repo
        .find_conflicting(room.id, &stay(date(2025, 2, 5), date(2025, 2, 7)), None)
        .await?;
    let before = repo
        .find_conflicting(room.id, &stay(date(2025, 1, 28), date(2025, 2, 1)), None)
        .await?;

    assert!(after.is_empty());
    assert!(before.is_empty());

    Ok(())
}

/// Tests that cancelled reservations never block a room.
///
/// Expected: no conflicts
#[tokio::test]
async fn ignores_cancelled_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, _) = seed(db, ReservationStatus::Cancelled).await?;

    let repo = ReservationRepository::new(db);
    let conflicts = repo
        .find_conflicting(room.id, &stay(date(2025, 2, 2), date(2025, 2, 3)), None)
        .await?;

    assert!(conflicts.is_empty());

    Ok(())
}

/// Tests excluding the reservation being rescheduled.
///
/// Expected: no conflicts with itself
#[tokio::test]
async fn excludes_given_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, existing) = seed(db, ReservationStatus::Confirmed).await?;

    let repo = ReservationRepository::new(db);
    let conflicts = repo
        .find_conflicting(
            room.id,
            &stay(date(2025, 2, 2), date(2025, 2, 4)),
            Some(existing.id),
        )
        .await?;

    assert!(conflicts.is_empty());

    Ok(())
}

/// Tests that reservations of other rooms are not conflicts.
///
/// Expected: no conflicts for a different room
#[tokio::test]
async fn ignores_other_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db, ReservationStatus::Confirmed).await?;
    let other_room = factory::room::create_room(db).await?;

    let repo = ReservationRepository::new(db);
    let conflicts = repo
        .find_conflicting(other_room.id, &stay(date(2025, 2, 2), date(2025, 2, 3)), None)
        .await?;

    assert!(conflicts.is_empty());

    Ok(())
}
