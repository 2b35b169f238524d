use super::*;

/// Tests moving a reservation to new dates.
///
/// Expected: dates replaced and night count recomputed
#[tokio::test]
async fn updates_dates_and_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update_stay(reservation.id, &stay(date(2025, 4, 1), date(2025, 4, 8)))
        .await?
        .unwrap();

    assert_eq!(updated.checkin_date, date(2025, 4, 1));
    assert_eq!(updated.checkout_date, date(2025, 4, 8));
    assert_eq!(updated.duration_nights, 7);

    Ok(())
}

/// Tests rescheduling a reservation that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let result = repo
        .update_stay(7, &stay(date(2025, 4, 1), date(2025, 4, 8)))
        .await?;

    assert!(result.is_none());

    Ok(())
}
