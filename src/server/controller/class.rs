use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::class::{CreateClassDto, FeedbackDto, UpdateClassDto},
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{ApiJson, ApiPath, ApiQuery},
        },
        model::class::{ClassSort, ClassStatus, ListClassesParam, UpdateClassParam},
        service::class::ClassService,
        state::AppState,
    },
};

/// Query parameters for the class listing.
///
/// A `limit` without an explicit `sort` ranks by popularity, matching the home page's
/// "popular classes" request.
#[derive(Deserialize)]
pub struct ListClassesQuery {
    pub limit: Option<u64>,
    #[serde(default)]
    pub approved: bool,
    pub sort: Option<String>,
}

#[derive(Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

/// List classes.
///
/// # Query
/// - `approved=true` - Only approved classes
/// - `sort=newest|popular` - Ordering (default newest, or popular when `limit` is set)
/// - `limit=N` - Cap on the number of classes returned
///
/// # Returns
/// - `200 OK` - Array of classes
/// - `400 Bad Request` - Unknown sort
pub async fn get_classes(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListClassesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let sort = match (query.sort, query.limit) {
        (Some(sort), _) => sort.parse()?,
        (None, Some(_)) => ClassSort::Popular,
        (None, None) => ClassSort::Newest,
    };

    let classes = ClassService::new(&state.db)
        .list(ListClassesParam {
            approved_only: query.approved,
            sort,
            limit: query.limit,
        })
        .await?;

    let dtos: Vec<_> = classes.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single approved class.
///
/// # Returns
/// - `200 OK` - The class
/// - `404 Not Found` - No such class, or it is not approved
pub async fn get_class(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let class = ClassService::new(&state.db).get_public(id).await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// List the calling instructor's own classes, whatever their status.
///
/// # Access Control
/// - `Instructor`
pub async fn get_my_classes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Instructor])
        .await?;

    let classes = ClassService::new(&state.db)
        .get_by_instructor(&instructor.email)
        .await?;

    let dtos: Vec<_> = classes.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a class owned by the calling instructor.
///
/// New classes start `pending` with every seat available.
///
/// # Access Control
/// - `Instructor`
///
/// # Returns
/// - `201 Created` - The created class
/// - `400 Bad Request` - Blank title, negative price, or no seats
/// - `401 Unauthorized` / `403 Forbidden` - Not an authenticated instructor
pub async fn create_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Instructor])
        .await?;

    let class = ClassService::new(&state.db)
        .create(
            &instructor,
            payload.title,
            payload.image_url,
            payload.price,
            payload.total_seats,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(class.into_dto())))
}

/// Update a class owned by the calling instructor.
///
/// # Access Control
/// - `Instructor` owning the class
///
/// # Returns
/// - `200 OK` - The updated class
/// - `400 Bad Request` - Invalid fields, or fewer seats than students enrolled
/// - `403 Forbidden` - Class belongs to another instructor
/// - `404 Not Found` - No such class
pub async fn update_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Instructor])
        .await?;

    let class = ClassService::new(&state.db)
        .update(id, &instructor.email, UpdateClassParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// Set a class's review status via `?status=pending|approved|denied`.
///
/// # Access Control
/// - `Admin`
pub async fn set_class_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<StatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let status: ClassStatus = query.status.parse()?;

    let class = ClassService::new(&state.db).set_status(id, status).await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// Store admin feedback on a class, replacing any earlier feedback.
///
/// # Access Control
/// - `Admin`
pub async fn set_class_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<FeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let class = ClassService::new(&state.db)
        .set_feedback(id, &payload.feedback)
        .await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}
