use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::payment::{PaymentIntentDto, PaymentIntentRequestDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, extract::ApiJson},
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Create a payment intent for a class price.
///
/// # Returns
/// - `200 OK` - `{ "clientSecret": "..." }`
/// - `400 Bad Request` - Price is not a positive amount
/// - `401 Unauthorized` - Missing or invalid credential
/// - `502 Bad Gateway` - Payment processor failed
pub async fn create_payment_intent(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<PaymentIntentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers).authenticate()?;

    let intent = PaymentService::new(state.payments.as_ref(), &state.payment_currency)
        .create_intent(payload.price)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaymentIntentDto {
            client_secret: intent.client_secret,
        }),
    ))
}
