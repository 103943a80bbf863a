use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{Map, Value};

use crate::{
    model::api::TokenDto,
    server::{error::AppError, middleware::extract::ApiJson, state::AppState},
};

/// Health check text served at the root path.
pub static HEALTH_MESSAGE: &str = "The Photography School server is running";

/// Issue a signed bearer credential.
///
/// Signs the JSON object in the request body, which must carry an `email` claim, into
/// a credential valid for one hour. Issuance does not check the store; the credential
/// only counts as proof of identity when presented back on later requests.
///
/// # Returns
/// - `200 OK` - `{ "token": "<jwt>" }`
/// - `400 Bad Request` - Body has no `email` claim
pub async fn issue_token(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let token = state.tokens.issue(payload)?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// GET / - Health check.
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}
