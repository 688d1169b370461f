use super::*;
use sea_orm::EntityTrait;

/// Tests deleting an unreferenced theme.
///
/// Expected: Ok(()) with the row removed
#[tokio::test]
async fn deletes_unreferenced_theme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let theme = factory::create_theme(db).await?;

    let service = ThemeService::new(db);
    let result = service.delete(theme.id).await;

    assert!(result.is_ok());

    let db_theme = entity::prelude::Theme::find_by_id(theme.id)
        .one(db)
        .await
        .map_err(AppError::from)?;
    assert!(db_theme.is_none());

    Ok(())
}

/// Tests deleting a theme id that does not exist.
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

    let service = ThemeService::new(db);
    let result = service.delete(9999).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting a theme that a reservation still references.
///
/// Expected: Err(AppError::BadRequest) with the theme left in place
#[tokio::test]
async fn rejects_referenced_theme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, theme, _) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ThemeService::new(db);
    let result = service.delete(theme.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    // The theme survives the failed delete
    let db_theme = entity::prelude::Theme::find_by_id(theme.id)
        .one(db)
        .await
        .map_err(AppError::from)?;
    assert!(db_theme.is_some());

    Ok(())
}
