use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// Price is not a positive, finite amount.
    #[error("Invalid payment amount {0}")]
    InvalidAmount(f64),

    /// The processor answered with a non-success status.
    #[error("Payment processor returned {status}: {body}")]
    Upstream {
        /// HTTP status returned by the processor
        status: u16,
        /// Response body for server-side diagnostics
        body: String,
    },

    /// Transport or decoding failure talking to the processor.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Converts payment errors into HTTP responses.
///
/// - `InvalidAmount` → 400 Bad Request
/// - `Upstream` / `Request` → 502 Bad Gateway with a generic message; details are
///   logged server-side
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidAmount(_) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.to_string()))).into_response()
            }
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto::new("payment processor unavailable")),
                )
                    .into_response()
            }
        }
    }
}
