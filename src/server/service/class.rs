//! Class catalog service.
//!
//! Instructors create and edit their own classes; admins move classes between review
//! states and leave feedback. Public reads only ever see approved classes.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::class::ClassRepository,
    error::{auth::AuthError, AppError},
    model::{
        account::{Account, Role},
        class::{
            ClassOffering, ClassStatus, CreateClassParam, ListClassesParam, UpdateClassParam,
        },
    },
};

pub struct ClassService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists classes with the requested filter, ordering, and cap.
    pub async fn list(&self, param: ListClassesParam) -> Result<Vec<ClassOffering>, AppError> {
        ClassRepository::new(self.db).list(param).await
    }

    /// Gets an approved class by id.
    ///
    /// Pending and denied classes are reported as missing.
    pub async fn get_public(&self, id: i32) -> Result<ClassOffering, AppError> {
        ClassRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|class| class.status == ClassStatus::Approved)
            .ok_or_else(|| class_not_found(id))
    }

    /// Lists the classes owned by an instructor, newest first.
    pub async fn get_by_instructor(&self, email: &str) -> Result<Vec<ClassOffering>, AppError> {
        ClassRepository::new(self.db).get_by_instructor(email).await
    }

    /// Creates a pending class owned by `instructor`.
    ///
    /// # Arguments
    /// - `instructor` - Account of the authenticated instructor
    /// - `title` / `image_url` / `price` / `total_seats` - Class details
    ///
    /// # Returns
    /// - `Ok(ClassOffering)` - The created class
    /// - `Err(AppError::BadRequest)` - Blank title, negative price, or no seats
    pub async fn create(
        &self,
        instructor: &Account,
        title: String,
        image_url: Option<String>,
        price: f64,
        total_seats: i32,
    ) -> Result<ClassOffering, AppError> {
        validate_details(Some(&title), Some(price), Some(total_seats))?;

        let class = ClassRepository::new(self.db)
            .create(CreateClassParam {
                title,
                image_url,
                instructor_name: instructor.name.clone(),
                instructor_email: instructor.email.clone(),
                price,
                total_seats,
            })
            .await?;

        tracing::info!("Instructor {} created class {}", instructor.email, class.id);

        Ok(class)
    }

    /// Applies a partial update to a class owned by `editor_email`.
    ///
    /// # Returns
    /// - `Ok(ClassOffering)` - The updated class
    /// - `Err(AppError::NotFound)` - No class with this id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Class belongs to another instructor
    /// - `Err(AppError::BadRequest)` - Invalid details, or fewer seats than students enrolled
    pub async fn update(
        &self,
        id: i32,
        editor_email: &str,
        param: UpdateClassParam,
    ) -> Result<ClassOffering, AppError> {
        let repo = ClassRepository::new(self.db);

        let class = repo.find_by_id(id).await?.ok_or_else(|| class_not_found(id))?;

        if class.instructor_email != editor_email {
            return Err(AuthError::AccessDenied {
                email: editor_email.to_string(),
                required: Role::Instructor,
            }
            .into());
        }

        validate_details(param.title.as_deref(), param.price, param.total_seats)?;

        if let Some(total_seats) = param.total_seats {
            if total_seats < class.enrolled {
                return Err(AppError::BadRequest(format!(
                    "Class {} already has {} students enrolled",
                    id, class.enrolled
                )));
            }
        }

        if let Some(updated) = repo.update(id, param).await? {
            return Ok(updated);
        }

        // Enrollment may have raced past the new total since the check above.
        match repo.find_by_id(id).await? {
            Some(current) => Err(AppError::BadRequest(format!(
                "Class {} already has {} students enrolled",
                id, current.enrolled
            ))),
            None => Err(class_not_found(id)),
        }
    }

    /// Sets the review status of a class.
    ///
    /// # Returns
    /// - `Ok(ClassOffering)` - Class with its new status
    /// - `Err(AppError::NotFound)` - No class with this id
    pub async fn set_status(&self, id: i32, status: ClassStatus) -> Result<ClassOffering, AppError> {
        let repo = ClassRepository::new(self.db);

        if !repo.set_status(id, status).await? {
            return Err(class_not_found(id));
        }

        tracing::info!("Class {} is now {}", id, status);

        repo.find_by_id(id).await?.ok_or_else(|| class_not_found(id))
    }

    /// Stores admin feedback on a class, replacing any earlier feedback.
    pub async fn set_feedback(&self, id: i32, feedback: &str) -> Result<ClassOffering, AppError> {
        let repo = ClassRepository::new(self.db);

        if !repo.set_feedback(id, feedback).await? {
            return Err(class_not_found(id));
        }

        repo.find_by_id(id).await?.ok_or_else(|| class_not_found(id))
    }
}

fn class_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Class {} not found", id))
}

fn validate_details(title: Option<&str>, price: Option<f64>, total_seats: Option<i32>) -> Result<(), AppError> {
    if title.is_some_and(|title| title.trim().is_empty()) {
        return Err(AppError::BadRequest("Title must not be blank".to_string()));
    }
    if price.is_some_and(|price| !price.is_finite() || price < 0.0) {
        return Err(AppError::BadRequest("Price must be a non-negative amount".to_string()));
    }
    if total_seats.is_some_and(|seats| seats < 1) {
        return Err(AppError::BadRequest("A class needs at least one seat".to_string()));
    }

    Ok(())
}
