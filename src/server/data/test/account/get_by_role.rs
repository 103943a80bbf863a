use super::*;

/// Tests filtering accounts by role.
///
/// Verifies that only instructors are returned when instructors are requested.
///
/// Expected: Ok with the two instructors
#[tokio::test]
async fn returns_only_matching_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db).await?;
    factory::create_admin(db).await?;
    let first = factory::create_instructor(db).await?;
    let second = factory::create_instructor(db).await?;

    let repo = AccountRepository::new(db);
    let instructors = repo.get_by_role(Role::Instructor, None).await?;

    let emails: Vec<_> = instructors.iter().map(|a| a.email.as_str()).collect();
    assert_eq!(emails.len(), 2);
    assert!(emails.contains(&first.email.as_str()));
    assert!(emails.contains(&second.email.as_str()));
    assert!(instructors.iter().all(|a| a.role == Role::Instructor));

    Ok(())
}

/// Tests capping the role listing.
///
/// Expected: Ok with exactly `limit` accounts
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..4 {
        factory::create_instructor(db).await?;
    }

    let repo = AccountRepository::new(db);
    let instructors = repo.get_by_role(Role::Instructor, Some(3)).await?;

    assert_eq!(instructors.len(), 3);

    Ok(())
}
