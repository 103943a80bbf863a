use super::*;

/// Tests promoting a student to instructor.
///
/// Expected: Ok(true) and the stored role changes
#[tokio::test]
async fn updates_existing_account_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_account(db).await?;

    let repo = AccountRepository::new(db);
    let updated = repo.set_role(&student.email, Role::Instructor).await?;

    assert!(updated);
    let account = repo.find_by_email(&student.email).await?.unwrap();
    assert_eq!(account.role, Role::Instructor);

    Ok(())
}

/// Tests changing the role of an unknown email.
///
/// Expected: Ok(false) and no account is created
#[tokio::test]
async fn reports_missing_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let updated = repo.set_role("ghost@example.com", Role::Admin).await?;

    assert!(!updated);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
