//! Cart ("classlist") service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{cart::CartRepository, class::ClassRepository},
    error::AppError,
    model::cart::{CartEntry, CartItem},
};

/// Service managing a student's cart.
///
/// Every operation is scoped to the student's own email; entries belonging to other
/// students behave as if they did not exist.
pub struct CartService<'a> {
    db: &'a DatabaseConnection,
    allow_duplicates: bool,
}

impl<'a> CartService<'a> {
    /// Creates a new CartService.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `allow_duplicates` - Whether the same class may be added to a cart twice
    pub fn new(db: &'a DatabaseConnection, allow_duplicates: bool) -> Self {
        Self {
            db,
            allow_duplicates,
        }
    }

    /// Adds a class to the student's cart.
    ///
    /// # Returns
    /// - `Ok(CartEntry)` - The new cart entry
    /// - `Err(AppError::NotFound)` - Class does not exist
    /// - `Err(AppError::Conflict)` - Class already in the cart and duplicates are disabled
    pub async fn add(&self, student_email: &str, class_id: i32) -> Result<CartEntry, AppError> {
        let repo = CartRepository::new(self.db);

        if ClassRepository::new(self.db)
            .find_by_id(class_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Class {} not found", class_id)));
        }

        if !self.allow_duplicates && repo.contains_class(student_email, class_id).await? {
            return Err(AppError::Conflict(format!(
                "Class {} is already in the cart",
                class_id
            )));
        }

        repo.create(student_email, class_id).await
    }

    /// Gets the student's cart with class details.
    pub async fn list(&self, student_email: &str) -> Result<Vec<CartItem>, AppError> {
        CartRepository::new(self.db)
            .get_items_by_student(student_email)
            .await
    }

    /// Gets one entry from the student's cart with class details.
    pub async fn get(&self, student_email: &str, id: i32) -> Result<CartItem, AppError> {
        CartRepository::new(self.db)
            .find_item_for_student(id, student_email)
            .await?
            .ok_or_else(|| cart_entry_not_found(id))
    }

    /// Removes an entry from the student's cart.
    ///
    /// # Returns
    /// - `Ok(())` - Entry removed
    /// - `Err(AppError::NotFound)` - No such entry in the student's cart
    pub async fn remove(&self, student_email: &str, id: i32) -> Result<(), AppError> {
        if !CartRepository::new(self.db).delete(id, student_email).await? {
            return Err(cart_entry_not_found(id));
        }

        Ok(())
    }
}

fn cart_entry_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Cart entry {} not found", id))
}
