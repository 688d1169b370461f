use super::*;

/// Tests that a time slot referenced by a reservation is reported as in use.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_referenced_time_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, time, _, _) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let result = repo.exists_by_time_id(time.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests that an unreferenced time slot is reported as free.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unreferenced_time_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_reservation_with_dependencies(db).await?;
    let free_time = factory::create_time(db).await?;

    let repo = ReservationRepository::new(db);
    let result = repo.exists_by_time_id(free_time.id).await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}
