use crate::server::{
    data::enrollment::EnrollmentRepository,
    error::AppError,
    model::enrollment::{CreateEnrollmentParam, SortOrder},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_student;

fn param(student_email: &str, class_id: i32, cart_entry_id: i32) -> CreateEnrollmentParam {
    CreateEnrollmentParam {
        student_email: student_email.to_string(),
        class_id,
        class_title: "Landscape Basics".to_string(),
        cart_entry_id,
        amount: 50.0,
        transaction_id: format!("pi_{}", cart_entry_id),
    }
}
