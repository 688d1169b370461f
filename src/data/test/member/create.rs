use super::*;

/// Tests creating a new member from signup parameters.
///
/// Verifies that the repository inserts the member with the provided
/// name, email, and password, and that new members are never admins.
///
/// Expected: Ok(Member) with admin=false
#[tokio::test]
async fn creates_member_from_signup_params() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let result = repo
        .create(SignupParams {
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

    // Verify member exists in database
    let db_member = entity::prelude::Member::find_by_id(member.id)
        .one(db)
        .await?;
    assert!(db_member.is_some());
    let db_member = db_member.unwrap();
    assert_eq!(db_member.email, "daon@example.com");
    assert_eq!(db_member.password, "1234");

    Ok(())
}

/// Tests that inserting a second member with the same email fails.
///
/// The email column is unique, so the database rejects the duplicate even
/// when the service-level check is bypassed.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email_at_database_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    repo.create(SignupParams {
        name: "First".to_string(),
        email: "taken@example.com".to_string(),
        password: "1234".to_string(),
    })
    .await?;

    let result = repo
        .create(SignupParams {
            name: "Second".to_string(),
            email: "taken@example.com".to_string(),
            password: "5678".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
