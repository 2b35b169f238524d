use super::*;

/// Tests deleting a user with a confirmed reservation.
///
/// Expected: Err(AppError::Conflict) and the user kept
#[tokio::test]
async fn refuses_user_with_active_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let result = UserService::new(db).delete(user.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(UserRepository::new(db).find_by_id(user.id).await?.is_some());

    Ok(())
}

/// Tests deleting a user with tokens and a cancelled reservation.
///
/// Expected: Ok(()) with the user, its tokens and its cancelled reservation removed
#[tokio::test]
async fn deletes_user_with_tokens_and_cancelled_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = AuthService::new(db);
    let user = auth
        .signup("Aminata Kane", "aminata@example.com", "secret123")
        .await?;
    let (token, _) = auth.login("aminata@example.com", "secret123").await?;
    auth.forgot_password("aminata@example.com").await?;

    let room = factory::room::create_room(db).await?;
    let reservation = factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;

    UserService::new(db).delete(user.id).await?;

    assert!(UserRepository::new(db).find_by_id(user.id).await?.is_none());
    assert!(auth.authenticate(&token).await?.is_none());
    assert!(ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).delete(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
