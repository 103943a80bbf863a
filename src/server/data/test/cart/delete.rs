use super::*;

/// Tests removing an entry from the owner's cart.
///
/// Expected: Ok(true) and the entry is gone
#[tokio::test]
async fn deletes_owned_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _class, entry) = factory::helpers::create_cart_with_dependencies(db).await?;

    let repo = CartRepository::new(db);

    assert!(repo.delete(entry.id, &student.email).await?);
    assert!(repo.find_for_student(entry.id, &student.email).await?.is_none());

    Ok(())
}

/// Tests removing someone else's cart entry.
///
/// Expected: Ok(false) and the entry survives
#[tokio::test]
async fn refuses_entry_owned_by_another_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _class, entry) = factory::helpers::create_cart_with_dependencies(db).await?;
    let intruder = factory::create_account(db).await?;

    let repo = CartRepository::new(db);

    assert!(!repo.delete(entry.id, &intruder.email).await?);
    assert!(repo.find_for_student(entry.id, &student.email).await?.is_some());

    Ok(())
}
