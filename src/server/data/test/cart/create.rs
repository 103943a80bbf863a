use super::*;

/// Tests adding a class to a student's cart.
///
/// Expected: Ok with the entry retrievable by its owner
#[tokio::test]
async fn adds_entry_for_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, class) = factory::helpers::create_class_with_instructor(db).await?;
    let student = factory::create_account(db).await?;

    let repo = CartRepository::new(db);
    let entry = repo.create(&student.email, class.id).await?;

    assert_eq!(entry.student_email, student.email);
    assert_eq!(entry.class_id, class.id);
    assert!(repo.find_for_student(entry.id, &student.email).await?.is_some());
    assert!(repo.contains_class(&student.email, class.id).await?);

    Ok(())
}

/// Tests adding the same class twice at the repository level.
///
/// Expected: Ok with two distinct entries
#[tokio::test]
async fn stores_duplicate_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, class) = factory::helpers::create_class_with_instructor(db).await?;
    let student = factory::create_account(db).await?;

    let repo = CartRepository::new(db);
    let first = repo.create(&student.email, class.id).await?;
    let second = repo.create(&student.email, class.id).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.get_items_by_student(&student.email).await?.len(), 2);

    Ok(())
}

/// Tests that a cart entry is invisible to other students.
///
/// Expected: Ok(None) when looked up under a different email
#[tokio::test]
async fn hides_entry_from_other_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_student, _class, entry) = factory::helpers::create_cart_with_dependencies(db).await?;
    let other = factory::create_account(db).await?;

    let repo = CartRepository::new(db);

    assert!(repo.find_for_student(entry.id, &other.email).await?.is_none());
    assert!(repo
        .find_item_for_student(entry.id, &other.email)
        .await?
        .is_none());

    Ok(())
}
