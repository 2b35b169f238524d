use super::*;

/// Tests deleting a room that still has a confirmed reservation.
///
/// Expected: Err(AppError::Conflict) and the room kept
#[tokio::test]
async fn refuses_room_with_active_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let locks = RoomLocks::new();
    let result = RoomService::new(db, &locks).delete(room.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(RoomRepository::new(db).find_by_id(room.id).await?.is_some());

    Ok(())
}

/// Tests deleting a room with only cancelled reservations.
///
/// Expected: Ok(()) with the room and its cancelled reservations removed
#[tokio::test]
async fn deletes_room_and_cancelled_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;
    let reservation = factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;

    let locks = RoomLocks::new();
    RoomService::new(db, &locks).delete(room.id).await?;

    assert!(RoomRepository::new(db).find_by_id(room.id).await?.is_none());
    assert!(ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a room that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let locks = RoomLocks::new();
    let result = RoomService::new(db, &locks).delete(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
