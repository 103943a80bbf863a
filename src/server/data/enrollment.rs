//! Enrollment record ("payment") data repository.
//!
//! Records are insert-only; nothing here updates or deletes them.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::enrollment::{CreateEnrollmentParam, EnrollmentRecord, SortOrder},
};

use entity::enrollment::Column;

pub struct EnrollmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an enrollment record stamped with the current time.
    pub async fn create(&self, param: CreateEnrollmentParam) -> Result<EnrollmentRecord, AppError> {
        let entity = entity::enrollment::ActiveModel {
            student_email: ActiveValue::Set(param.student_email),
            class_id: ActiveValue::Set(param.class_id),
            class_title: ActiveValue::Set(param.class_title),
            cart_entry_id: ActiveValue::Set(param.cart_entry_id),
            amount: ActiveValue::Set(param.amount),
            transaction_id: ActiveValue::Set(param.transaction_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(EnrollmentRecord::from_entity(entity))
    }

    /// Gets a student's enrollment records ordered by enrollment date.
    pub async fn get_by_student(
        &self,
        student_email: &str,
        order: SortOrder,
    ) -> Result<Vec<EnrollmentRecord>, AppError> {
        let query = entity::prelude::Enrollment::find().filter(Column::StudentEmail.eq(student_email));

        let query = match order {
            SortOrder::Asc => query
                .order_by_asc(Column::CreatedAt)
                .order_by_asc(Column::Id),
            SortOrder::Desc => query
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
        };

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(EnrollmentRecord::from_entity).collect())
    }
}
