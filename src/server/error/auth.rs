use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::account::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header was sent.
    #[error("Request carried no bearer credential")]
    MissingCredential,

    /// The `Authorization` header is not of the form `Bearer <token>`.
    #[error("Authorization header is not a bearer credential")]
    MalformedCredential,

    /// Token signature, encoding, or expiry check failed.
    #[error("Bearer credential rejected: {0}")]
    InvalidCredential(#[from] jsonwebtoken::errors::Error),

    /// Authenticated caller lacks the required role.
    ///
    /// Raised identically whether the caller's account is missing or holds another
    /// role, so responses never reveal which emails are registered.
    #[error("{email} lacks required role {required}")]
    AccessDenied {
        /// Email of the authenticated caller.
        email: String,
        /// Role the operation demands.
        required: Role,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingCredential` / `MalformedCredential` / `InvalidCredential` → 401 with
///   "unauthorized access"
/// - `AccessDenied` → 403 with "forbidden access"
///
/// The underlying cause is logged at debug level only.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingCredential | Self::MalformedCredential | Self::InvalidCredential(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("unauthorized access")),
            )
                .into_response(),
            Self::AccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("forbidden access")),
            )
                .into_response(),
        }
    }
}
