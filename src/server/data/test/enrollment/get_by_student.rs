use super::*;

/// Tests ordering a student's enrollment history.
///
/// Verifies that ascending and descending orders are exact reverses of each other and
/// that other students' records are excluded.
///
/// Expected: Ok with records in insertion order for Asc, reversed for Desc
#[tokio::test]
async fn orders_by_enrollment_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, class, entry) = factory::helpers::create_cart_with_dependencies(db).await?;
    let other = factory::create_account(db).await?;

    let repo = EnrollmentRepository::new(db);
    let first = repo.create(param(&student.email, class.id, entry.id)).await?;
    let second = repo.create(param(&student.email, class.id, entry.id + 1)).await?;
    repo.create(param(&other.email, class.id, entry.id + 2)).await?;

    let asc = repo.get_by_student(&student.email, SortOrder::Asc).await?;
    let desc = repo.get_by_student(&student.email, SortOrder::Desc).await?;

    let asc_ids: Vec<_> = asc.iter().map(|r| r.id).collect();
    let desc_ids: Vec<_> = desc.iter().map(|r| r.id).collect();
    assert_eq!(asc_ids, vec![first.id, second.id]);
    assert_eq!(desc_ids, vec![second.id, first.id]);

    Ok(())
}
