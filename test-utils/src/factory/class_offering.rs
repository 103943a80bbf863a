//! Class offering factory for creating test classes.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test class offerings owned by an existing instructor.
///
/// Defaults to a pending class with 10 seats, none taken, priced at 50.0.
pub struct ClassOfferingFactory<'a> {
    db: &'a DatabaseConnection,
    instructor_email: String,
    title: String,
    price: f64,
    total_seats: i32,
    available_seats: i32,
    enrolled: i32,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> ClassOfferingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, instructor_email: &str) -> Self {
        let id = next_id();
        Self {
            db,
            instructor_email: instructor_email.to_string(),
            title: format!("Class {}", id),
            price: 50.0,
            total_seats: 10,
            available_seats: 10,
            enrolled: 0,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets both total and available seats, leaving nobody enrolled.
    pub fn seats(mut self, seats: i32) -> Self {
        self.total_seats = seats;
        self.available_seats = seats;
        self.enrolled = 0;
        self
    }

    /// Sets the enrolled count, reducing available seats to match.
    pub fn enrolled(mut self, enrolled: i32) -> Self {
        self.enrolled = enrolled;
        self.available_seats = self.total_seats - enrolled;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the class offering into the database.
    ///
    /// # Returns
    /// - `Ok(entity::class_offering::Model)` - Created class offering
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown instructor)
    pub async fn build(self) -> Result<entity::class_offering::Model, DbErr> {
        entity::class_offering::ActiveModel {
            title: ActiveValue::Set(self.title),
            image_url: ActiveValue::Set(None),
            instructor_name: ActiveValue::Set("Instructor".to_string()),
            instructor_email: ActiveValue::Set(self.instructor_email),
            price: ActiveValue::Set(self.price),
            total_seats: ActiveValue::Set(self.total_seats),
            available_seats: ActiveValue::Set(self.available_seats),
            enrolled: ActiveValue::Set(self.enrolled),
            status: ActiveValue::Set(self.status),
            feedback: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending class with default values for the given instructor.
pub async fn create_class(
    db: &DatabaseConnection,
    instructor_email: &str,
) -> Result<entity::class_offering::Model, DbErr> {
    ClassOfferingFactory::new(db, instructor_email).build().await
}
