use axum::Json;
use axum::extract::{Path, Query, State};
use edumart_store::{DeleteResult, InsertResult, UpdateResult};
use serde_json::Value;
use tracing::instrument;

use super::model::{CourseCount, CourseListResponse, CourseUpdate};
use super::service::CourseService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::utils::pagination::PageParams;

/// List accepted courses plus a paginated window over all courses
#[utoipa::path(
    get,
    path = "/courses",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number, default 1"),
        ("size" = Option<u64>, Query, description = "Page size, default 10")
    ),
    responses(
        (status = 200, description = "Accepted courses and the requested page", body = CourseListResponse),
        (status = 400, description = "Non-numeric page or size", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<CourseListResponse>, AppError> {
    let courses = CourseService::list(state.store.as_ref(), params.window()).await?;
    Ok(Json(courses))
}

/// Approximate number of course documents
#[utoipa::path(
    get,
    path = "/totalCourses",
    responses(
        (status = 200, description = "Course count", body = CourseCount)
    ),
    tag = "Courses"
)]
#[instrument]
pub async fn count_courses(State(state): State<AppState>) -> Result<Json<CourseCount>, AppError> {
    let count = CourseService::count(state.store.as_ref()).await?;
    Ok(Json(CourseCount { count }))
}

/// Fetch one course by id
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(("id" = String, Path, description = "Course object id (24-char hex)")),
    responses(
        (status = 200, description = "Course document, or null when unknown"),
        (status = 400, description = "Malformed id", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let course = CourseService::get_course(state.store.as_ref(), &id).await?;
    Ok(Json(course))
}

/// List the courses owned by an email
#[utoipa::path(
    get,
    path = "/courses/user/{email}",
    params(("email" = String, Path, description = "Owner email")),
    responses(
        (status = 200, description = "Courses owned by the email"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument]
pub async fn get_courses_by_owner(
    State(state): State<AppState>,
    Path(email): Path<String>,
    _auth_user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let courses = CourseService::get_courses_by_owner(state.store.as_ref(), &email).await?;
    Ok(Json(courses))
}

/// Store a new course document
#[utoipa::path(
    post,
    path = "/courses",
    responses(
        (status = 200, description = "Insert acknowledgement", body = InsertResult),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument]
pub async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<InsertResult>, AppError> {
    let result = CourseService::create_course(state.store.as_ref(), &body).await?;
    Ok(Json(result))
}

/// Patch course fields and add to the enrollment counter
#[utoipa::path(
    patch,
    path = "/courses/{id}",
    params(("id" = String, Path, description = "Course object id (24-char hex)")),
    request_body = CourseUpdate,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResult),
        (status = 400, description = "Malformed id", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<CourseUpdate>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = CourseService::update_course(state.store.as_ref(), &id, patch).await?;
    Ok(Json(result))
}

/// Delete one course by id
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(("id" = String, Path, description = "Course object id (24-char hex)")),
    responses(
        (status = 200, description = "Delete acknowledgement", body = DeleteResult),
        (status = 400, description = "Malformed id", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = CourseService::delete_course(state.store.as_ref(), &id).await?;
    Ok(Json(result))
}
