use super::*;

/// Tests toggling the availability flag.
///
/// Expected: flag persisted, true returned for an existing room
#[tokio::test]
async fn toggles_availability() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Room).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let repo = RoomRepository::new(db);

    assert!(repo.set_available(room.id, false).await?);
    assert!(!repo.find_by_id(room.id).await?.unwrap().available);

    assert!(repo.set_available(room.id, true).await?);
    assert!(repo.find_by_id(room.id).await?.unwrap().available);

    Ok(())
}

/// Tests toggling a room that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Room).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);

    assert!(!repo.set_available(42, false).await?);

    Ok(())
}
