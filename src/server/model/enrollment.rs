//! Enrollment ledger domain models.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::enrollment::{EnrollmentDto, EnrollmentReceiptDto, FinalizeEnrollmentDto},
    server::{error::AppError, model::class::ClassOffering},
};

/// Durable record of a completed, paid enrollment. Immutable once written.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentRecord {
    pub id: i32,
    pub student_email: String,
    pub class_id: i32,
    pub class_title: String,
    /// Cart entry the enrollment was converted from; that entry no longer exists.
    pub cart_entry_id: i32,
    pub amount: f64,
    /// Payment processor transaction reference.
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
}

impl EnrollmentRecord {
    pub fn into_dto(self) -> EnrollmentDto {
        EnrollmentDto {
            id: self.id,
            student_email: self.student_email,
            class_id: self.class_id,
            class_title: self.class_title,
            cart_entry_id: self.cart_entry_id,
            amount: self.amount,
            transaction_id: self.transaction_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            id: entity.id,
            student_email: entity.student_email,
            class_id: entity.class_id,
            class_title: entity.class_title,
            cart_entry_id: entity.cart_entry_id,
            amount: entity.amount,
            transaction_id: entity.transaction_id,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for converting a cart entry into a paid enrollment.
#[derive(Debug, Clone)]
pub struct FinalizeEnrollmentParam {
    pub student_email: String,
    pub class_id: i32,
    pub cart_entry_id: i32,
    pub amount: f64,
    pub transaction_id: String,
}

impl FinalizeEnrollmentParam {
    /// Builds finalize parameters for the authenticated student from the request body.
    pub fn from_dto(student_email: String, dto: FinalizeEnrollmentDto) -> Self {
        Self {
            student_email,
            class_id: dto.class_id,
            cart_entry_id: dto.cart_entry_id,
            amount: dto.amount,
            transaction_id: dto.transaction_id,
        }
    }
}

/// Parameters for inserting an enrollment record inside the finalize transaction.
#[derive(Debug, Clone)]
pub struct CreateEnrollmentParam {
    pub student_email: String,
    pub class_id: i32,
    pub class_title: String,
    pub cart_entry_id: i32,
    pub amount: f64,
    pub transaction_id: String,
}

/// Result of a successful enrollment: the new record and the class after the seat decrement.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentReceipt {
    pub record: EnrollmentRecord,
    pub class: ClassOffering,
}

impl EnrollmentReceipt {
    pub fn into_dto(self) -> EnrollmentReceiptDto {
        EnrollmentReceiptDto {
            enrollment: self.record.into_dto(),
            class: self.class.into_dto(),
        }
    }
}

/// Ordering of an enrollment history by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(AppError::BadRequest(format!(
                "Unknown sort order '{}'",
                other
            ))),
        }
    }
}
