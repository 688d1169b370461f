use super::*;

/// Tests creating a valid future reservation.
///
/// Expected: Ok(Reservation) with joined relations
#[tokio::test]
async fn creates_valid_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let time = factory::create_time_at(db, NaiveTime::from_hms_opt(10, 0, 0).unwrap()).await?;
    let theme = factory::create_theme(db).await?;

    let now = NaiveDate::from_ymd_opt(2026, 8, 26)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();

    let service = ReservationService::new(db);
    let result = service
        .add(
            CreateReservationParams {
                member_id: member.id,
                date,
                time_id: time.id,
                theme_id: theme.id,
            },
            now,
        )
        .await;

    assert!(result.is_ok());
    let reservation = result.unwrap();
    assert_eq!(reservation.date, date);
    assert_eq!(reservation.member.id, member.id);
    assert_eq!(reservation.time.id, time.id);
    assert_eq!(reservation.theme.id, theme.id);

    Ok(())
}

/// Tests that a reservation against a missing time slot is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_nonexistent_time_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let theme = factory::create_theme(db).await?;

    let now = NaiveDate::from_ymd_opt(2026, 8, 26)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let service = ReservationService::new(db);
    let result = service
        .add(
            CreateReservationParams {
                member_id: member.id,
                date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                time_id: 9999,
                theme_id: theme.id,
            },
            now,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a reservation against a missing theme is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_nonexistent_theme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let time = factory::create_time(db).await?;

    let now = NaiveDate::from_ymd_opt(2026, 8, 26)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let service = ReservationService::new(db);
    let result = service
        .add(
            CreateReservationParams {
                member_id: member.id,
                date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                time_id: time.id,
                theme_id: 9999,
            },
            now,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a reservation for a missing member is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_nonexistent_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let time = factory::create_time(db).await?;
    let theme = factory::create_theme(db).await?;

    let now = NaiveDate::from_ymd_opt(2026, 8, 26)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let service = ReservationService::new(db);
    let result = service
        .add(
            CreateReservationParams {
                member_id: 9999,
                date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                time_id: time.id,
                theme_id: theme.id,
            },
            now,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a reservation whose slot already started is rejected.
///
/// The slot starts at 10:00 on the requested date while `now` is noon the
/// same day, so the booking lies in the past.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_past_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let time = factory::create_time_at(db, NaiveTime::from_hms_opt(10, 0, 0).unwrap()).await?;
    let theme = factory::create_theme(db).await?;

    let date = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
    let now = date.and_hms_opt(12, 0, 0).unwrap();

    let service = ReservationService::new(db);
    let result = service
        .add(
            CreateReservationParams {
                member_id: member.id,
                date,
                time_id: time.id,
                theme_id: theme.id,
            },
            now,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a same-day slot that has not started yet is accepted.
///
/// Expected: Ok(Reservation)
#[tokio::test]
async fn accepts_same_day_future_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let time = factory::create_time_at(db, NaiveTime::from_hms_opt(18, 0, 0).unwrap()).await?;
    let theme = factory::create_theme(db).await?;

    let date = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
    let now = date.and_hms_opt(12, 0, 0).unwrap();

    let service = ReservationService::new(db);
    let result = service
        .add(
            CreateReservationParams {
                member_id: member.id,
                date,
                time_id: time.id,
                theme_id: theme.id,
            },
            now,
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that booking an occupied date + time + theme slot is rejected.
///
/// A second member attempts the same slot as an existing reservation.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, time, theme, existing) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let other_member = factory::create_member(db).await?;

    let now = NaiveDate::from_ymd_opt(2026, 8, 26)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let service = ReservationService::new(db);
    let result = service
        .add(
            CreateReservationParams {
                member_id: other_member.id,
                date: existing.date,
                time_id: time.id,
                theme_id: theme.id,
            },
            now,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
