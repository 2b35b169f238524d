use super::*;

/// Tests a partial room update.
///
/// Expected: price changes, room number and type unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Room).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .room_number(12)
        .room_type(RoomType::Double)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let updated = repo
        .update(UpdateRoomParams {
            id: room.id,
            nightly_price: Some(20_000),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.nightly_price, 20_000);
    assert_eq!(updated.room_number, 12);
    assert_eq!(updated.room_type, RoomType::Double);

    Ok(())
}
