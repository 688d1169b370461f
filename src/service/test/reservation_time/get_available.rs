use super::*;

/// Tests flagging booked slots for a date and theme.
///
/// Two slots exist; one is reserved for the target date and theme. Both
/// must come back, with only the reserved one flagged booked.
///
/// Expected: Ok(Vec<AvailableTime>) listing every slot with its state
#[tokio::test]
async fn flags_booked_slots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let theme = factory::create_theme(db).await?;
    let booked_time = factory::create_time_at(db, NaiveTime::from_hms_opt(10, 0, 0).unwrap()).await?;
    let free_time = factory::create_time_at(db, NaiveTime::from_hms_opt(12, 0, 0).unwrap()).await?;
    let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();

    factory::reservation::ReservationFactory::new(db, member.id, booked_time.id, theme.id)
        .date(date)
        .build()
        .await?;

    let service = ReservationTimeService::new(db);
    let result = service.get_available(date, theme.id).await;

    assert!(result.is_ok());
    let slots = result.unwrap();
    assert_eq!(slots.len(), 2);

    let booked = slots.iter().find(|s| s.time.id == booked_time.id).unwrap();
    assert!(booked.booked);

    let free = slots.iter().find(|s| s.time.id == free_time.id).unwrap();
    assert!(!free.booked);

    Ok(())
}

/// Tests that a booking on another date or theme leaves slots free.
///
/// Expected: Ok with no slot flagged booked
#[tokio::test]
async fn ignores_bookings_elsewhere() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let theme = factory::create_theme(db).await?;
    let other_theme = factory::create_theme(db).await?;
    let time = factory::create_time(db).await?;
    let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();

    // Booked for the same theme on another date
    factory::reservation::ReservationFactory::new(db, member.id, time.id, theme.id)
        .date(NaiveDate::from_ymd_opt(2026, 9, 2).unwrap())
        .build()
        .await?;

    // Booked for another theme on the same date
    factory::reservation::ReservationFactory::new(db, member.id, time.id, other_theme.id)
        .date(date)
        .build()
        .await?;

    let service = ReservationTimeService::new(db);
    let slots = service.get_available(date, theme.id).await?;

    assert_eq!(slots.len(), 1);
    assert!(!slots[0].booked);

    Ok(())
}
