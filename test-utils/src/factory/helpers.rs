//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an approved class together with its owning instructor.
///
/// # Returns
/// - `Ok((instructor, class))` - Created account and class offering
/// - `Err(DbErr)` - Database error during creation
pub async fn create_class_with_instructor(
    db: &DatabaseConnection,
) -> Result<(entity::account::Model, entity::class_offering::Model), DbErr> {
    let instructor = crate::factory::account::create_instructor(db).await?;
    let class = crate::factory::class_offering::ClassOfferingFactory::new(db, &instructor.email)
        .status("approved")
        .build()
        .await?;

    Ok((instructor, class))
}

/// Creates a student with one cart entry for a freshly created approved class.
///
/// This creates:
/// 1. Instructor account
/// 2. Approved class offering (10 seats)
/// 3. Student account
/// 4. Cart entry referencing the class
///
/// # Returns
/// - `Ok((student, class, cart_entry))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_cart_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::account::Model,
        entity::class_offering::Model,
        entity::cart_entry::Model,
    ),
    DbErr,
> {
    let (_instructor, class) = create_class_with_instructor(db).await?;
    let student = crate::factory::account::create_account(db).await?;
    let cart_entry =
        crate::factory::cart_entry::create_cart_entry(db, &student.email, class.id).await?;

    Ok((student, class, cart_entry))
}
