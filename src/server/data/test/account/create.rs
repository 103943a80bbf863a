use super::*;

/// Tests registering a new account.
///
/// Verifies that a first sign-in inserts the account with the default student role.
///
/// Expected: Ok(Created) with role Student
#[tokio::test]
async fn creates_account_with_student_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let outcome = repo.create(param("ansel@example.com")).await?;

    let CreateAccountOutcome::Created(account) = outcome else {
        panic!("expected a new account, got {:?}", outcome);
    };
    assert_eq!(account.email, "ansel@example.com");
    assert_eq!(account.role, Role::Student);

    Ok(())
}

/// Tests registering an email that already has an account.
///
/// Verifies that the existing account is returned untouched (its role survives) and
/// no second row is inserted.
///
/// Expected: Ok(AlreadyExists) with the original role
#[tokio::test]
async fn returns_existing_account_without_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;

    let repo = AccountRepository::new(db);
    let outcome = repo.create(param(&instructor.email)).await?;

    let CreateAccountOutcome::AlreadyExists(account) = outcome else {
        panic!("expected existing account, got {:?}", outcome);
    };
    assert_eq!(account.role, Role::Instructor);
    assert_eq!(account.name, instructor.name);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests finding an account that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let result = repo.find_by_email("nobody@example.com").await?;

    assert!(result.is_none());

    Ok(())
}
