use super::*;

/// Tests listing rooms occupied during a stay.
///
/// Expected: only the room with an active overlapping reservation
#[tokio::test]
async fn lists_rooms_with_active_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let booked = factory::room::create_room(db).await?;
    let cancelled = factory::room::create_room(db).await?;
    let later = factory::room::create_room(db).await?;

    factory::reservation::ReservationFactory::new(db, user.id, booked.id)
        .stay(date(2025, 3, 1), date(2025, 3, 4))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, cancelled.id)
        .stay(date(2025, 3, 1), date(2025, 3, 4))
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, later.id)
        .stay(date(2025, 3, 10), date(2025, 3, 12))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let ids = repo
        .booked_room_ids(&stay(date(2025, 3, 2), date(2025, 3, 5)))
        .await?;

    assert_eq!(ids, vec![booked.id]);

    Ok(())
}
