use super::*;

/// Tests logging in with correct credentials.
///
/// Expected: Ok(Member)
#[tokio::test]
async fn authenticates_with_correct_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .email("login@example.com")
        .password("secret")
        .build()
        .await?;

    let service = MemberService::new(db);
    let result = service.login("login@example.com", "secret").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, created.id);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .email("login@example.com")
        .password("secret")
        .build()
        .await?;

    let service = MemberService::new(db);
    let result = service.login("login@example.com", "wrong").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an email no member has.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let result = service.login("nobody@example.com", "secret").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
