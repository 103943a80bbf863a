use super::*;

/// Tests listing a cart with class details.
///
/// Verifies that each item carries the referenced class and that other students'
/// entries are excluded.
///
/// Expected: Ok with the student's single item and its class
#[tokio::test]
async fn joins_class_details() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, class, entry) = factory::helpers::create_cart_with_dependencies(db).await?;
    let other = factory::create_account(db).await?;
    factory::create_cart_entry(db, &other.email, class.id).await?;

    let repo = CartRepository::new(db);
    let items = repo.get_items_by_student(&student.email).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].entry.id, entry.id);
    assert_eq!(items[0].class.id, class.id);
    assert_eq!(items[0].class.title, class.title);

    Ok(())
}

/// Tests listing an empty cart.
///
/// Expected: Ok with no items
#[tokio::test]
async fn returns_empty_for_student_without_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_account(db).await?;

    let repo = CartRepository::new(db);

    assert!(repo.get_items_by_student(&student.email).await?.is_empty());

    Ok(())
}
