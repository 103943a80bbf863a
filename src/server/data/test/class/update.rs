use super::*;

/// Tests changing the seat total of a class with enrolled students.
///
/// Verifies that available seats are recomputed from the new total and the current
/// enrolled count.
///
/// Expected: Ok(Some) with available_seats == total_seats - enrolled
#[tokio::test]
async fn recomputes_available_seats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let class = ClassOfferingFactory::new(db, &instructor.email)
        .seats(10)
        .enrolled(4)
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    let updated = repo
        .update(
            class.id,
            UpdateClassParam {
                total_seats: Some(6),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.total_seats, 6);
    assert_eq!(updated.available_seats, 2);
    assert_eq!(updated.enrolled, 4);

    Ok(())
}

/// Tests a partial update touching only the title and price.
///
/// Expected: Ok(Some) with untouched fields preserved
#[tokio::test]
async fn leaves_unspecified_fields_alone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let class = factory::create_class(db, &instructor.email).await?;

    let repo = ClassRepository::new(db);
    let updated = repo
        .update(
            class.id,
            UpdateClassParam {
                title: Some("Portraits at Dusk".to_string()),
                price: Some(75.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Portraits at Dusk");
    assert_eq!(updated.price, 75.0);
    assert_eq!(updated.total_seats, class.total_seats);
    assert_eq!(updated.available_seats, class.available_seats);

    Ok(())
}

/// Tests an update that changes nothing.
///
/// Expected: Ok(Some) equal to the stored class
#[tokio::test]
async fn empty_update_returns_current_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let class = factory::create_class(db, &instructor.email).await?;

    let repo = ClassRepository::new(db);
    let updated = repo
        .update(class.id, UpdateClassParam::default())
        .await?
        .unwrap();

    assert_eq!(updated.title, class.title);

    Ok(())
}

/// Tests updating a class that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    let result = repo
        .update(
            12345,
            UpdateClassParam {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests a seat total below the enrolled count.
///
/// The guard lives in the update statement itself, so the stored row must be left
/// untouched even when the caller skipped its own check.
///
/// Expected: Ok(None) with the class unchanged
#[tokio::test]
async fn refuses_total_below_enrolled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let class = ClassOfferingFactory::new(db, &instructor.email)
        .seats(10)
        .enrolled(7)
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    let result = repo
        .update(
            class.id,
            UpdateClassParam {
                title: Some("Renamed".to_string()),
                total_seats: Some(5),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    let stored = repo.find_by_id(class.id).await?.unwrap();
    assert_eq!(stored.title, class.title);
    assert_eq!(stored.total_seats, 10);
    assert_eq!(stored.available_seats, 3);

    Ok(())
}

/// Tests resizing a class right after its last seat was sold.
///
/// Available seats are derived from the enrolled count at write time, so the seat
/// taken by `reserve_seat` stays taken.
///
/// Expected: Ok(Some) with available_seats == 0 and enrolled == total_seats
#[tokio::test]
async fn keeps_seat_sold_before_resize() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let class = ClassOfferingFactory::new(db, &instructor.email)
        .seats(10)
        .enrolled(9)
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    assert!(repo.reserve_seat(class.id).await?);

    let updated = repo
        .update(
            class.id,
            UpdateClassParam {
                total_seats: Some(10),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.enrolled, 10);
    assert_eq!(updated.available_seats, 0);
    assert!(!repo.reserve_seat(class.id).await?);

    Ok(())
}
