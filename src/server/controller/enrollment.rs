use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::enrollment::FinalizeEnrollmentDto,
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::{ApiJson, ApiQuery},
        },
        model::enrollment::{FinalizeEnrollmentParam, SortOrder},
        service::enrollment::EnrollmentService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub sort: Option<String>,
}

/// List the caller's enrollments ordered by date via `?sort=asc|desc` (default asc).
///
/// # Returns
/// - `200 OK` - Array of enrollment records
/// - `400 Bad Request` - Unknown sort
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn get_enrollments(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<HistoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers).authenticate()?;

    let order = match query.sort {
        Some(sort) => sort.parse()?,
        None => SortOrder::default(),
    };

    let records = EnrollmentService::new(&state.db)
        .history(&identity.email, order)
        .await?;

    let dtos: Vec<_> = records.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Finalize a paid enrollment.
///
/// Consumes the caller's cart entry, reserves one seat, and records the payment, all
/// or nothing.
///
/// # Returns
/// - `201 Created` - `{ "enrollment": {...}, "class": {...} }` with updated seat counters
/// - `400 Bad Request` - Invalid amount or transaction reference, or cart entry for another class
/// - `404 Not Found` - No such cart entry for the caller, or no such class
/// - `409 Conflict` - No seats available
pub async fn finalize_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<FinalizeEnrollmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers).authenticate()?;

    let receipt = EnrollmentService::new(&state.db)
        .finalize(FinalizeEnrollmentParam::from_dto(identity.email, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(receipt.into_dto())))
}
