use super::*;

fn params(room_number: i32) -> CreateRoomParams {
    CreateRoomParams {
        room_number,
        room_type: RoomType::Double,
        nightly_price: 25_000,
        available: true,
        description: Some("Sea view".to_string()),
        photo: None,
    }
}

/// Tests creating a room.
///
/// Expected: Ok(Room) with the given fields
#[tokio::test]
async fn creates_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let locks = RoomLocks::new();
    let room = RoomService::new(db, &locks).create(params(101)).await?;

    assert_eq!(room.room_number, 101);
    assert_eq!(room.room_type, RoomType::Double);
    assert_eq!(room.nightly_price, 25_000);
    assert!(room.available);

    Ok(())
}

/// Tests room numbers are unique and positive.
///
/// Expected: Err(AppError::Conflict) for a duplicate, Err(AppError::BadRequest) for zero
#[tokio::test]
async fn rejects_duplicate_or_non_positive_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let locks = RoomLocks::new();
    let service = RoomService::new(db, &locks);
    service.create(params(7)).await?;

    assert!(matches!(
        service.create(params(7)).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.create(params(0)).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests renumbering a room onto a number used by another room.
///
/// Expected: Err(AppError::Conflict), while keeping its own number is accepted
#[tokio::test]
async fn rejects_renumbering_onto_taken_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::room::RoomFactory::new(db)
        .room_number(11)
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .room_number(12)
        .build()
        .await?;

    let locks = RoomLocks::new();
    let service = RoomService::new(db, &locks);

    let result = service
        .update(UpdateRoomParams {
            id: first.id,
            room_number: Some(12),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let same = service
        .update(UpdateRoomParams {
            id: first.id,
            room_number: Some(11),
            nightly_price: Some(9_000),
            ..Default::default()
        })
        .await?;
    assert_eq!(same.nightly_price, 9_000);

    Ok(())
}
