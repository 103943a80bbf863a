use super::*;

/// Tests creating a class for an instructor.
///
/// Verifies that a new class starts pending with every seat available and nobody
/// enrolled.
///
/// Expected: Ok with pending status and available_seats == total_seats
#[tokio::test]
async fn creates_pending_class_with_all_seats_available() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;

    let repo = ClassRepository::new(db);
    let class = repo
        .create(CreateClassParam {
            title: "Street Photography".to_string(),
            image_url: Some("https://img.example.com/street.jpg".to_string()),
            instructor_name: instructor.name.clone(),
            instructor_email: instructor.email.clone(),
            price: 89.5,
            total_seats: 12,
        })
        .await?;

    assert_eq!(class.status, ClassStatus::Pending);
    assert_eq!(class.total_seats, 12);
    assert_eq!(class.available_seats, 12);
    assert_eq!(class.enrolled, 0);
    assert!(class.feedback.is_none());

    let stored = repo.find_by_id(class.id).await?.unwrap();
    assert_eq!(stored.title, "Street Photography");
    assert_eq!(stored.instructor_email, instructor.email);

    Ok(())
}

/// Tests creating a class for an email with no account.
///
/// Expected: Err because the instructor foreign key is enforced
#[tokio::test]
async fn fails_for_unknown_instructor() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    let result = repo
        .create(CreateClassParam {
            title: "Orphan".to_string(),
            image_url: None,
            instructor_name: "Nobody".to_string(),
            instructor_email: "nobody@example.com".to_string(),
            price: 10.0,
            total_seats: 5,
        })
        .await;

    assert!(result.is_err());
}
