use super::*;

/// Tests deleting an existing theme.
///
/// Expected: Ok(()) with the row removed
#[tokio::test]
async fn deletes_existing_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Theme)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let theme = factory::create_theme(db).await?;

    let repo = ThemeRepository::new(db);
    let result = repo.delete(theme.id).await;

    assert!(result.is_ok());

    // Verify theme no longer exists
    let db_theme = entity::prelude::Theme::find_by_id(theme.id).one(db).await?;
    assert!(db_theme.is_none());

    Ok(())
}

/// Tests deleting a non-existent theme.
///
/// Expected: Ok(()) with no effect
#[tokio::test]
async fn succeeds_for_nonexistent_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Theme)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ThemeRepository::new(db);
    let result = repo.delete(9999).await;

    assert!(result.is_ok());

    Ok(())
}
