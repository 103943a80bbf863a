use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::class::ClassDto;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AddToCartDto {
    pub class_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CartEntryDto {
    pub id: i32,
    pub student_email: String,
    pub class_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Cart entry with the class it references, as shown on the student's cart page.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CartItemDto {
    pub id: i32,
    pub student_email: String,
    pub created_at: DateTime<Utc>,
    pub class: ClassDto,
}
