use super::*;

/// Tests registering a new member with a free email.
///
/// Expected: Ok(Member) with admin=false
#[tokio::test]
async fn registers_member_with_free_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let result = service
        .signup(SignupParams {
            name: "Daon".to_string(),
            email: "daon@example.com".to_string(),
            password: "1234".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let member = result.unwrap();
    assert_eq!(member.name, "Daon");
    assert_eq!(member.email, "daon@example.com");
    assert!(!member.admin);

    Ok(())
}

/// Tests that signup rejects an email that is already registered.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let service = MemberService::new(db);
    let result = service
        .signup(SignupParams {
            name: "Second".to_string(),
            email: "taken@example.com".to_string(),
            password: "5678".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
