use super::*;

/// Tests the public approved-only listing.
///
/// Verifies that pending and denied classes are excluded and that approved classes
/// come back newest first.
///
/// Expected: Ok with only approved classes ordered by descending creation date
#[tokio::test]
async fn approved_only_returns_approved_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let now = Utc::now();

    let older = ClassOfferingFactory::new(db, &instructor.email)
        .status("approved")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = ClassOfferingFactory::new(db, &instructor.email)
        .status("approved")
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    ClassOfferingFactory::new(db, &instructor.email)
        .status("pending")
        .created_at(now)
        .build()
        .await?;
    ClassOfferingFactory::new(db, &instructor.email)
        .status("denied")
        .created_at(now)
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    let classes = repo
        .list(ListClassesParam {
            approved_only: true,
            sort: ClassSort::Newest,
            limit: None,
        })
        .await?;

    let ids: Vec<_> = classes.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(classes.iter().all(|c| c.status == ClassStatus::Approved));

    Ok(())
}

/// Tests the unfiltered listing.
///
/// Expected: Ok with every class regardless of status
#[tokio::test]
async fn unfiltered_returns_every_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    for status in ["pending", "approved", "denied"] {
        ClassOfferingFactory::new(db, &instructor.email)
            .status(status)
            .build()
            .await?;
    }

    let repo = ClassRepository::new(db);
    let classes = repo.list(ListClassesParam::default()).await?;

    assert_eq!(classes.len(), 3);

    Ok(())
}

/// Tests the popular ordering with a cap.
///
/// Verifies that classes are ranked by enrolled count and that the limit trims the
/// tail of the ranking.
///
/// Expected: Ok with the two most enrolled classes, highest first
#[tokio::test]
async fn popular_orders_by_enrolled_and_applies_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let quiet = ClassOfferingFactory::new(db, &instructor.email)
        .status("approved")
        .enrolled(1)
        .build()
        .await?;
    let busiest = ClassOfferingFactory::new(db, &instructor.email)
        .status("approved")
        .enrolled(9)
        .build()
        .await?;
    let middle = ClassOfferingFactory::new(db, &instructor.email)
        .status("approved")
        .enrolled(4)
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    let classes = repo
        .list(ListClassesParam {
            approved_only: true,
            sort: ClassSort::Popular,
            limit: Some(2),
        })
        .await?;

    let ids: Vec<_> = classes.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![busiest.id, middle.id]);
    assert!(!ids.contains(&quiet.id));

    Ok(())
}

/// Tests listing an instructor's own classes.
///
/// Expected: Ok with only the requested instructor's classes
#[tokio::test]
async fn get_by_instructor_excludes_other_instructors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mine = factory::create_instructor(db).await?;
    let theirs = factory::create_instructor(db).await?;
    factory::create_class(db, &mine.email).await?;
    factory::create_class(db, &mine.email).await?;
    factory::create_class(db, &theirs.email).await?;

    let repo = ClassRepository::new(db);
    let classes = repo.get_by_instructor(&mine.email).await?;

    assert_eq!(classes.len(), 2);
    assert!(classes.iter().all(|c| c.instructor_email == mine.email));

    Ok(())
}
