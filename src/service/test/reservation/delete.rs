use super::*;
use sea_orm::EntityTrait;

/// Tests cancelling an existing reservation.
///
/// Expected: Ok(()) with the row removed
#[tokio::test]
async fn deletes_existing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    let result = service.delete(reservation.id).await;

    assert!(result.is_ok());

    let db_reservation = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await
        .map_err(AppError::from)?;
    assert!(db_reservation.is_none());

    Ok(())
}

/// Tests cancelling a reservation id that does not exist.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_nonexistent_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReservationService::new(db);
    let result = service.delete(9999).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
