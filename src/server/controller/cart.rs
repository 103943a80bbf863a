use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::DeleteResultDto, cart::AddToCartDto},
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::{ApiJson, ApiPath},
        },
        service::cart::CartService,
        state::AppState,
    },
};

/// List the caller's cart with class details.
///
/// # Returns
/// - `200 OK` - Array of cart items
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn get_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers).authenticate()?;

    let items = CartService::new(&state.db, state.allow_duplicate_cart_entries)
        .list(&identity.email)
        .await?;

    let dtos: Vec<_> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one entry of the caller's cart.
///
/// # Returns
/// - `200 OK` - The cart item
/// - `404 Not Found` - No such entry in the caller's cart
pub async fn get_cart_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers).authenticate()?;

    let item = CartService::new(&state.db, state.allow_duplicate_cart_entries)
        .get(&identity.email, id)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Add a class to the caller's cart.
///
/// # Returns
/// # Access Control
/// - Any registered account; cart entries reference the student's account row
///
/// # Returns
/// - `201 Created` - The new cart entry
/// - `403 Forbidden` - Token email has no account
/// - `404 Not Found` - No such class
/// - `409 Conflict` - Class already in the cart and duplicates are disabled
pub async fn add_to_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<AddToCartDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let entry = CartService::new(&state.db, state.allow_duplicate_cart_entries)
        .add(&student.email, payload.class_id)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// Remove an entry from the caller's cart.
///
/// # Returns
/// - `200 OK` - `{ "deleted_count": 1 }`
/// - `404 Not Found` - No such entry in the caller's cart
pub async fn remove_from_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers).authenticate()?;

    CartService::new(&state.db, state.allow_duplicate_cart_entries)
        .remove(&identity.email, id)
        .await?;

    Ok((StatusCode::OK, Json(DeleteResultDto { deleted_count: 1 })))
}
