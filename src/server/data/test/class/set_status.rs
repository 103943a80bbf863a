use super::*;

/// Tests approving a pending class.
///
/// Expected: Ok(true) with the stored status set to approved
#[tokio::test]
async fn approves_pending_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let class = factory::create_class(db, &instructor.email).await?;

    let repo = ClassRepository::new(db);
    assert!(repo.set_status(class.id, ClassStatus::Approved).await?);

    let updated = repo.find_by_id(class.id).await?.unwrap();
    assert_eq!(updated.status, ClassStatus::Approved);

    Ok(())
}

/// Tests storing admin feedback on a class.
///
/// Verifies that a second call replaces the earlier feedback.
///
/// Expected: Ok(true) with the latest feedback stored
#[tokio::test]
async fn replaces_feedback() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let class = factory::create_class(db, &instructor.email).await?;

    let repo = ClassRepository::new(db);
    repo.set_feedback(class.id, "Needs a clearer syllabus").await?;
    assert!(repo.set_feedback(class.id, "Looks good now").await?);

    let updated = repo.find_by_id(class.id).await?.unwrap();
    assert_eq!(updated.feedback.as_deref(), Some("Looks good now"));

    Ok(())
}

/// Tests updating status and feedback on an unknown class.
///
/// Expected: Ok(false) for both
#[tokio::test]
async fn reports_missing_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);

    assert!(!repo.set_status(404, ClassStatus::Denied).await?);
    assert!(!repo.set_feedback(404, "n/a").await?);

    Ok(())
}
