use super::*;

/// Tests creating a room.
///
/// Expected: Ok(Room) with the provided fields
#[tokio::test]
async fn creates_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Room).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let room = repo
        .create(CreateRoomParams {
            room_number: 101,
            room_type: RoomType::Suite,
            nightly_price: 45_000,
            available: true,
            description: Some("Sea view".to_string()),
            photo: None,
        })
        .await?;

    assert_eq!(room.room_number, 101);
    assert_eq!(room.room_type, RoomType::Suite);
    assert_eq!(room.nightly_price, 45_000);
    assert!(room.available);
    assert_eq!(room.description.as_deref(), Some("Sea view"));

    Ok(())
}

/// Tests the room number uniqueness check.
///
/// Expected: taken for another room, free when the owning room is excluded
#[tokio::test]
async fn detects_taken_room_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Room).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .room_number(7)
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    assert!(repo.number_taken(7, None).await?);
    assert!(!repo.number_taken(7, Some(room.id)).await?);
    assert!(!repo.number_taken(8, None).await?);

    Ok(())
}
