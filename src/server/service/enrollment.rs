//! Enrollment ledger service.
//!
//! Finalizing an enrollment moves a class from a student's cart to a paid enrollment
//! record. The whole move runs inside one database transaction:
//!
//! 1. Load the cart entry and check it belongs to the student and references the class
//! 2. Reserve a seat with a conditional update (`available_seats > 0`)
//! 3. Insert the enrollment record
//! 4. Delete the cart entry
//!
//! Any failure drops the transaction before commit, which rolls back every write made
//! so far. Seat reservation is a single conditional statement, so concurrent
//! finalizations for the last seat cannot both succeed.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{cart::CartRepository, class::ClassRepository, enrollment::EnrollmentRepository},
    error::{enrollment::EnrollmentError, AppError},
    model::enrollment::{
        CreateEnrollmentParam, EnrollmentReceipt, EnrollmentRecord, FinalizeEnrollmentParam,
        SortOrder,
    },
};

pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Converts a paid cart entry into an enrollment.
    ///
    /// # Arguments
    /// - `param` - Student, class, originating cart entry, and payment details
    ///
    /// # Returns
    /// - `Ok(EnrollmentReceipt)` - The new record and the class with updated seat counters
    /// - `Err(AppError::BadRequest)` - Amount or transaction reference is invalid
    /// - `Err(AppError::NotFound)` - Cart entry not in the student's cart, or class missing
    /// - `Err(AppError::EnrollmentErr(CartEntryMismatch))` - Cart entry is for another class
    /// - `Err(AppError::EnrollmentErr(SeatsExhausted))` - Class has no seats left
    pub async fn finalize(&self, param: FinalizeEnrollmentParam) -> Result<EnrollmentReceipt, AppError> {
        if !param.amount.is_finite() || param.amount < 0.0 {
            return Err(AppError::BadRequest(
                "Amount must be a non-negative number".to_string(),
            ));
        }
        if param.transaction_id.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Transaction reference is required".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let cart_repo = CartRepository::new(&txn);
        let class_repo = ClassRepository::new(&txn);

        let entry = cart_repo
            .find_for_student(param.cart_entry_id, &param.student_email)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Cart entry {} not found", param.cart_entry_id))
            })?;

        if entry.class_id != param.class_id {
            return Err(EnrollmentError::CartEntryMismatch {
                cart_entry_id: entry.id,
                class_id: param.class_id,
            }
            .into());
        }

        if !class_repo.reserve_seat(param.class_id).await? {
            if class_repo.find_by_id(param.class_id).await?.is_none() {
                return Err(AppError::NotFound(format!(
                    "Class {} not found",
                    param.class_id
                )));
            }

            tracing::info!(
                "Rejected enrollment of {} in class {}: no seats available",
                param.student_email,
                param.class_id
            );

            return Err(EnrollmentError::SeatsExhausted {
                class_id: param.class_id,
            }
            .into());
        }

        let class = class_repo
            .find_by_id(param.class_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Class {} not found", param.class_id)))?;

        let record = EnrollmentRepository::new(&txn)
            .create(CreateEnrollmentParam {
                student_email: param.student_email,
                class_id: class.id,
                class_title: class.title.clone(),
                cart_entry_id: entry.id,
                amount: param.amount,
                transaction_id: param.transaction_id,
            })
            .await?;

        cart_repo.delete(entry.id, &record.student_email).await?;

        txn.commit().await?;

        tracing::info!(
            "Enrolled {} in class {} ({} seats left)",
            record.student_email,
            class.id,
            class.available_seats
        );

        Ok(EnrollmentReceipt { record, class })
    }

    /// Gets the student's enrollment history ordered by enrollment date.
    pub async fn history(
        &self,
        student_email: &str,
        order: SortOrder,
    ) -> Result<Vec<EnrollmentRecord>, AppError> {
        EnrollmentRepository::new(self.db)
            .get_by_student(student_email, order)
            .await
    }
}
