use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    model::account::{CreateAccountDto, CreateAccountResultDto},
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{ApiJson, ApiPath, ApiQuery},
        },
        model::account::{CreateAccountOutcome, CreateAccountParam, Role},
        service::account::AccountService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct LimitQuery {
    pub limit: Option<u64>,
}

#[derive(Deserialize)]
pub struct SetRoleQuery {
    pub email: String,
    pub role: String,
}

/// Register an account on first sign-in.
///
/// Idempotent by email: an existing account is returned untouched.
///
/// # Returns
/// - `201 Created` - Account created with the `student` role
/// - `200 OK` - Account already existed (`inserted: false`)
/// - `400 Bad Request` - Blank email or name
pub async fn create_account(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AccountService::new(&state.db);

    let outcome = service
        .register(CreateAccountParam::from_dto(payload))
        .await?;

    let (status, dto) = match outcome {
        CreateAccountOutcome::Created(account) => (
            StatusCode::CREATED,
            CreateAccountResultDto {
                inserted: true,
                message: "user created".to_string(),
                account: account.into_dto(),
            },
        ),
        CreateAccountOutcome::AlreadyExists(account) => (
            StatusCode::OK,
            CreateAccountResultDto {
                inserted: false,
                message: "user already exists".to_string(),
                account: account.into_dto(),
            },
        ),
    };

    Ok((status, Json(dto)))
}

/// List every account.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Array of accounts
/// - `401 Unauthorized` / `403 Forbidden` - Not an authenticated admin
pub async fn get_accounts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let accounts = AccountService::new(&state.db).get_all().await?;

    let dtos: Vec<_> = accounts.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List instructors, optionally capped by `?limit=N`.
pub async fn get_instructors(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let instructors = AccountService::new(&state.db)
        .get_instructors(query.limit)
        .await?;

    let dtos: Vec<_> = instructors.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Check whether the caller holds a role.
///
/// `GET /users/{role}/{email}` answers `{ "<role>": bool }`. The answer is only ever
/// `true` for the caller's own email; asking about anyone else yields `false`.
///
/// # Returns
/// - `200 OK` - `{ "admin": true }` etc.
/// - `400 Bad Request` - Unknown role name
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn check_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath((role, email)): ApiPath<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers).authenticate()?;

    let role: Role = role.parse()?;

    let has_role = AccountService::new(&state.db)
        .has_role(&identity.email, &email, role)
        .await?;

    let mut body = Map::new();
    body.insert(role.as_str().to_string(), Value::Bool(has_role));

    Ok((StatusCode::OK, Json(body)))
}

/// Change an account's role via `?email=..&role=..`.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Updated account
/// - `400 Bad Request` - Unknown role name
/// - `404 Not Found` - No account for the email
pub async fn set_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<SetRoleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let role: Role = query.role.parse()?;

    let account = AccountService::new(&state.db)
        .set_role(&query.email, role)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}
