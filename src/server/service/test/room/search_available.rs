use super::*;

/// Tests the date search uses reservation dates and the availability flag.
///
/// Room A is booked over the window, room B is booked outside it, room C is flagged
/// unavailable and room D has only a cancelled booking over the window.
///
/// Expected: rooms B and D
#[tokio::test]
async fn returns_rooms_free_for_the_stay() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let booked = factory::room::RoomFactory::new(db)
        .room_number(201)
        .build()
        .await?;
    let booked_elsewhere = factory::room::RoomFactory::new(db)
        .room_number(202)
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .room_number(203)
        .available(false)
        .build()
        .await?;
    let cancelled = factory::room::RoomFactory::new(db)
        .room_number(204)
        .build()
        .await?;

    factory::reservation::ReservationFactory::new(db, user.id, booked.id)
        .stay(date(2025, 10, 1), date(2025, 10, 10))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, booked_elsewhere.id)
        .stay(date(2025, 10, 10), date(2025, 10, 12))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, cancelled.id)
        .stay(date(2025, 10, 3), date(2025, 10, 5))
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;

    let locks = RoomLocks::new();
    let rooms = RoomService::new(db, &locks)
        .search_available(&StayDates::new(date(2025, 10, 4), date(2025, 10, 10)).unwrap())
        .await?;

    let numbers: Vec<i32> = rooms.iter().map(|room| room.room_number).collect();
    assert_eq!(numbers, vec![202, 204]);

    Ok(())
}
