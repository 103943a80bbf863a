use super::*;

/// Tests recording a completed enrollment.
///
/// Expected: Ok with every field stored as given
#[tokio::test]
async fn stores_enrollment_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, class, entry) = factory::helpers::create_cart_with_dependencies(db).await?;

    let repo = EnrollmentRepository::new(db);
    let record = repo.create(param(&student.email, class.id, entry.id)).await?;

    assert_eq!(record.student_email, student.email);
    assert_eq!(record.class_id, class.id);
    assert_eq!(record.cart_entry_id, entry.id);
    assert_eq!(record.amount, 50.0);
    assert_eq!(record.transaction_id, format!("pi_{}", entry.id));

    Ok(())
}
