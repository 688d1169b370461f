use super::*;

/// Tests detecting an occupied date + time + theme slot.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_occupied_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, time, theme, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let result = repo
        .has_duplicate(reservation.date, time.id, theme.id)
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests that changing any slot component clears the duplicate flag.
///
/// Expected: Ok(false) for a different date, time, or theme
#[tokio::test]
async fn returns_false_when_any_component_differs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, time, theme, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let other_time = factory::create_time(db).await?;
    let other_theme = factory::create_theme(db).await?;
    let other_date = reservation.date + chrono::Duration::days(1);

    let repo = ReservationRepository::new(db);

    assert!(!repo.has_duplicate(other_date, time.id, theme.id).await?);
    assert!(!repo
        .has_duplicate(reservation.date, other_time.id, theme.id)
        .await?);
    assert!(!repo
        .has_duplicate(reservation.date, time.id, other_theme.id)
        .await?);

    Ok(())
}
