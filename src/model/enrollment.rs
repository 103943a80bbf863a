use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::class::ClassDto;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EnrollmentDto {
    pub id: i32,
    pub student_email: String,
    pub class_id: i32,
    pub class_title: String,
    pub cart_entry_id: i32,
    pub amount: f64,
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /payments`, sent once the processor has confirmed the charge.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FinalizeEnrollmentDto {
    pub class_id: i32,
    pub cart_entry_id: i32,
    pub amount: f64,
    pub transaction_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EnrollmentReceiptDto {
    pub enrollment: EnrollmentDto,
    pub class: ClassDto,
}
