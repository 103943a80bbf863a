use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum EnrollmentError {
    /// The class has no available seats left; nothing was written.
    #[error("Class {class_id} has no available seats")]
    SeatsExhausted {
        /// Class the enrollment targeted
        class_id: i32,
    },

    /// The cart entry presented at checkout references a different class.
    #[error("Cart entry {cart_entry_id} does not reference class {class_id}")]
    CartEntryMismatch {
        /// Cart entry presented at checkout
        cart_entry_id: i32,
        /// Class named in the payment
        class_id: i32,
    },
}

/// Converts enrollment errors into HTTP responses.
///
/// - `SeatsExhausted` → 409 Conflict with "no seats available"
/// - `CartEntryMismatch` → 400 Bad Request
impl IntoResponse for EnrollmentError {
    fn into_response(self) -> Response {
        match self {
            Self::SeatsExhausted { .. } => (
                StatusCode::CONFLICT,
                Json(ErrorDto::new("no seats available")),
            )
                .into_response(),
            Self::CartEntryMismatch { .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(self.to_string())),
            )
                .into_response(),
        }
    }
}
