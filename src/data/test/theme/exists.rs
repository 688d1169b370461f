use super::*;

/// Tests that an existing theme id is reported as present.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Theme)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let theme = factory::create_theme(db).await?;

    let repo = ThemeRepository::new(db);
    let result = repo.exists(theme.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests that a missing theme id is reported as absent.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Theme)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ThemeRepository::new(db);
    let result = repo.exists(9999).await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}
