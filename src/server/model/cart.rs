//! Cart ("classlist") domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::cart::{CartEntryDto, CartItemDto},
    server::model::class::ClassOffering,
};

/// A student's pending selection of a class prior to payment.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub id: i32,
    pub student_email: String,
    pub class_id: i32,
    pub created_at: DateTime<Utc>,
}

impl CartEntry {
    pub fn into_dto(self) -> CartEntryDto {
        CartEntryDto {
            id: self.id,
            student_email: self.student_email,
            class_id: self.class_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::cart_entry::Model) -> Self {
        Self {
            id: entity.id,
            student_email: entity.student_email,
            class_id: entity.class_id,
            created_at: entity.created_at,
        }
    }
}

/// Cart entry joined with the class it references.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub entry: CartEntry,
    pub class: ClassOffering,
}

impl CartItem {
    pub fn into_dto(self) -> CartItemDto {
        CartItemDto {
            id: self.entry.id,
            student_email: self.entry.student_email,
            created_at: self.entry.created_at,
            class: self.class.into_dto(),
        }
    }
}
