//! Cart ("classlist") data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        cart::{CartEntry, CartItem},
        class::ClassOffering,
    },
};

use entity::cart_entry::Column;

/// Repository providing database operations for students' cart entries.
pub struct CartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a class to a student's cart.
    ///
    /// No de-duplication happens here; the cart service decides whether a second entry
    /// for the same class is allowed.
    pub async fn create(&self, student_email: &str, class_id: i32) -> Result<CartEntry, AppError> {
        let entity = entity::cart_entry::ActiveModel {
            student_email: ActiveValue::Set(student_email.to_string()),
            class_id: ActiveValue::Set(class_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CartEntry::from_entity(entity))
    }

    /// Finds a cart entry by id, only if it belongs to `student_email`.
    pub async fn find_for_student(
        &self,
        id: i32,
        student_email: &str,
    ) -> Result<Option<CartEntry>, AppError> {
        let entity = entity::prelude::CartEntry::find_by_id(id)
            .filter(Column::StudentEmail.eq(student_email))
            .one(self.db)
            .await?;

        Ok(entity.map(CartEntry::from_entity))
    }

    /// Finds a student's cart entry together with the class it references.
    pub async fn find_item_for_student(
        &self,
        id: i32,
        student_email: &str,
    ) -> Result<Option<CartItem>, AppError> {
        let result = entity::prelude::CartEntry::find_by_id(id)
            .filter(Column::StudentEmail.eq(student_email))
            .find_also_related(entity::prelude::ClassOffering)
            .one(self.db)
            .await?;

        match result {
            Some((entry, Some(class))) => Ok(Some(CartItem {
                entry: CartEntry::from_entity(entry),
                class: ClassOffering::from_entity(class)?,
            })),
            _ => Ok(None),
        }
    }

    /// Gets a student's cart with class details, oldest entry first.
    pub async fn get_items_by_student(&self, student_email: &str) -> Result<Vec<CartItem>, AppError> {
        let rows = entity::prelude::CartEntry::find()
            .filter(Column::StudentEmail.eq(student_email))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .find_also_related(entity::prelude::ClassOffering)
            .all(self.db)
            .await?;

        rows.into_iter()
            .filter_map(|(entry, class)| class.map(|class| (entry, class)))
            .map(|(entry, class)| {
                Ok(CartItem {
                    entry: CartEntry::from_entity(entry),
                    class: ClassOffering::from_entity(class)?,
                })
            })
            .collect()
    }

    /// Checks whether a student's cart already holds `class_id`.
    pub async fn contains_class(&self, student_email: &str, class_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::CartEntry::find()
            .filter(Column::StudentEmail.eq(student_email))
            .filter(Column::ClassId.eq(class_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a cart entry owned by `student_email`.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry deleted
    /// - `Ok(false)` - No such entry in this student's cart
    pub async fn delete(&self, id: i32, student_email: &str) -> Result<bool, AppError> {
        let result = entity::prelude::CartEntry::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::StudentEmail.eq(student_email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
