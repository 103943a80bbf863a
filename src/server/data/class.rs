//! Class offering data repository.
//!
//! Besides plain CRUD, this repository owns the seat-accounting update used by the
//! enrollment ledger: [`ClassRepository::reserve_seat`] decrements available seats and
//! increments the enrolled count in one conditional statement, so two concurrent
//! reservations can never take the counter below zero.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::class::{
        ClassOffering, ClassSort, ClassStatus, CreateClassParam, ListClassesParam,
        UpdateClassParam,
    },
};

use entity::class_offering::Column;

/// Repository providing database operations for class offerings.
pub struct ClassRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending class with every seat available.
    ///
    /// # Returns
    /// - `Ok(ClassOffering)` - The created class
    /// - `Err(AppError)` - Database error during insert (e.g. unknown instructor)
    pub async fn create(&self, param: CreateClassParam) -> Result<ClassOffering, AppError> {
        let entity = entity::class_offering::ActiveModel {
            title: ActiveValue::Set(param.title),
            image_url: ActiveValue::Set(param.image_url),
            instructor_name: ActiveValue::Set(param.instructor_name),
            instructor_email: ActiveValue::Set(param.instructor_email),
            price: ActiveValue::Set(param.price),
            total_seats: ActiveValue::Set(param.total_seats),
            available_seats: ActiveValue::Set(param.total_seats),
            enrolled: ActiveValue::Set(0),
            status: ActiveValue::Set(ClassStatus::default().as_str().to_string()),
            feedback: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ClassOffering::from_entity(entity)
    }

    /// Finds a class by id regardless of its status.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ClassOffering>, AppError> {
        entity::prelude::ClassOffering::find_by_id(id)
            .one(self.db)
            .await?
            .map(ClassOffering::from_entity)
            .transpose()
    }

    /// Lists classes according to the filter, ordering, and cap in `param`.
    ///
    /// Ties in enrolled count are broken by creation date so the popular ordering stays
    /// stable between calls.
    pub async fn list(&self, param: ListClassesParam) -> Result<Vec<ClassOffering>, AppError> {
        let mut query = entity::prelude::ClassOffering::find();

        if param.approved_only {
            query = query.filter(Column::Status.eq(ClassStatus::Approved.as_str()));
        }

        query = match param.sort {
            ClassSort::Newest => query.order_by_desc(Column::CreatedAt),
            ClassSort::Popular => query
                .order_by_desc(Column::Enrolled)
                .order_by_desc(Column::CreatedAt),
        };

        query
            .order_by_desc(Column::Id)
            .limit(param.limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(ClassOffering::from_entity)
            .collect()
    }

    /// Lists the classes owned by an instructor, newest first.
    pub async fn get_by_instructor(&self, email: &str) -> Result<Vec<ClassOffering>, AppError> {
        entity::prelude::ClassOffering::find()
            .filter(Column::InstructorEmail.eq(email))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ClassOffering::from_entity)
            .collect()
    }

    /// Applies a partial update to a class.
    ///
    /// Runs as a single `UPDATE`. A new seat total sets `available_seats` to
    /// `total_seats - enrolled` from the row's current enrolled count and only applies
    /// while `enrolled <= total_seats`, so a seat sold concurrently is never handed back.
    ///
    /// # Returns
    /// - `Ok(Some(ClassOffering))` - The updated class
    /// - `Ok(None)` - No class with this id, or the new total is below the enrolled count
    pub async fn update(
        &self,
        id: i32,
        param: UpdateClassParam,
    ) -> Result<Option<ClassOffering>, AppError> {
        let mut update = entity::prelude::ClassOffering::update_many().filter(Column::Id.eq(id));
        let mut changed = false;

        if let Some(title) = param.title {
            update = update.col_expr(Column::Title, Expr::value(title));
            changed = true;
        }
        if let Some(image_url) = param.image_url {
            update = update.col_expr(Column::ImageUrl, Expr::value(image_url));
            changed = true;
        }
        if let Some(price) = param.price {
            update = update.col_expr(Column::Price, Expr::value(price));
            changed = true;
        }
        if let Some(total_seats) = param.total_seats {
            update = update
                .filter(Column::Enrolled.lte(total_seats))
                .col_expr(Column::TotalSeats, Expr::value(total_seats))
                .col_expr(
                    Column::AvailableSeats,
                    Expr::value(total_seats).sub(Expr::col(Column::Enrolled)),
                );
            changed = true;
        }

        if !changed {
            return self.find_by_id(id).await;
        }

        if update.exec(self.db).await?.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Sets the review status of a class.
    ///
    /// # Returns
    /// - `Ok(true)` - Status updated
    /// - `Ok(false)` - No class with this id
    pub async fn set_status(&self, id: i32, status: ClassStatus) -> Result<bool, AppError> {
        let result = entity::prelude::ClassOffering::update_many()
            .filter(Column::Id.eq(id))
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the admin feedback on a class.
    ///
    /// # Returns
    /// - `Ok(true)` - Feedback stored
    /// - `Ok(false)` - No class with this id
    pub async fn set_feedback(&self, id: i32, feedback: &str) -> Result<bool, AppError> {
        let result = entity::prelude::ClassOffering::update_many()
            .filter(Column::Id.eq(id))
            .col_expr(Column::Feedback, Expr::value(feedback))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Takes one seat from a class if any remain.
    ///
    /// Runs as a single `UPDATE ... WHERE id = ? AND available_seats > 0`, decrementing
    /// `available_seats` and incrementing `enrolled` together.
    ///
    /// # Returns
    /// - `Ok(true)` - A seat was reserved
    /// - `Ok(false)` - The class has no seats left or does not exist
    /// - `Err(AppError)` - Database error during update
    pub async fn reserve_seat(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::ClassOffering::update_many()
            .filter(Column::Id.eq(id))
            .filter(Column::AvailableSeats.gt(0))
            .col_expr(Column::AvailableSeats, Expr::col(Column::AvailableSeats).sub(1))
            .col_expr(Column::Enrolled, Expr::col(Column::Enrolled).add(1))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
