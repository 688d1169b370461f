use super::*;

/// Tests creating a theme through the service.
///
/// Expected: Ok(Theme) with the provided fields
#[tokio::test]
async fn creates_theme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Theme)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ThemeService::new(db);
    let result = service
        .add(CreateThemeParams {
            name: "Time Heist".to_string(),
            description: "Steal back an hour".to_string(),
            thumbnail: "https://example.com/heist.jpg".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let theme = result.unwrap();
    assert_eq!(theme.name, "Time Heist");
    assert_eq!(theme.description, "Steal back an hour");

    Ok(())
}
