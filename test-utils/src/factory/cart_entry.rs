//! Cart entry factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a cart entry for the given student and class.
///
/// # Returns
/// - `Ok(entity::cart_entry::Model)` - Created cart entry
/// - `Err(DbErr)` - Database error during insert
pub async fn create_cart_entry(
    db: &DatabaseConnection,
    student_email: &str,
    class_id: i32,
) -> Result<entity::cart_entry::Model, DbErr> {
    entity::cart_entry::ActiveModel {
        student_email: ActiveValue::Set(student_email.to_string()),
        class_id: ActiveValue::Set(class_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
