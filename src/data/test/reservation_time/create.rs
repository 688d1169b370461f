use super::*;

/// Tests creating a new time slot.
///
/// Expected: Ok(ReservationTime) with the requested start time
#[tokio::test]
async fn creates_time_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReservationTime)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start_at = NaiveTime::from_hms_opt(10, 0, 0).unwrap();

    let repo = ReservationTimeRepository::new(db);
    let result = repo.create(start_at).await;

    assert!(result.is_ok());
    let time = result.unwrap();
    assert_eq!(time.start_at, start_at);

    // Verify slot exists in database
    let db_time = entity::prelude::ReservationTime::find_by_id(time.id)
        .one(db)
        .await?;
    assert!(db_time.is_some());
    assert_eq!(db_time.unwrap().start_at, start_at);

    Ok(())
}

/// Tests that a second slot with the same start time fails.
///
/// The start_at column is unique, so the database rejects the duplicate even
/// when the service-level check is bypassed.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_start_at_at_database_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReservationTime)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start_at = NaiveTime::from_hms_opt(14, 30, 0).unwrap();

    let repo = ReservationTimeRepository::new(db);
    repo.create(start_at).await?;
    let result = repo.create(start_at).await;

    assert!(result.is_err());

    Ok(())
}
