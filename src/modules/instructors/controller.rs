use axum::Json;
use axum::extract::{Path, State};
use edumart_store::{InsertResult, UpdateResult};
use serde_json::Value;
use tracing::instrument;

use super::model::StatusUpdate;
use super::service::InstructorService;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

/// List every instructor document
#[utoipa::path(
    get,
    path = "/instructors",
    responses(
        (status = 200, description = "All instructor documents"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Instructors"
)]
#[instrument]
pub async fn get_instructors(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Value>, AppError> {
    let instructors = InstructorService::get_instructors(state.store.as_ref()).await?;
    Ok(Json(instructors))
}

/// Fetch one instructor by name
#[utoipa::path(
    get,
    path = "/instructors/{name}",
    params(("name" = String, Path, description = "Instructor display name")),
    responses(
        (status = 200, description = "Instructor document, or null when unknown"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Instructors"
)]
#[instrument]
pub async fn get_instructor(
    State(state): State<AppState>,
    Path(name): Path<String>,
    _auth_user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let instructor = InstructorService::get_instructor(state.store.as_ref(), &name).await?;
    Ok(Json(instructor))
}

/// Store a new instructor document
#[utoipa::path(
    post,
    path = "/instructors",
    responses(
        (status = 200, description = "Insert acknowledgement", body = InsertResult),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse)
    ),
    tag = "Instructors"
)]
#[instrument]
pub async fn create_instructor(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<InsertResult>, AppError> {
    let result = InstructorService::create_instructor(state.store.as_ref(), &body).await?;
    Ok(Json(result))
}

/// Update the status of every instructor matching a name
#[utoipa::path(
    patch,
    path = "/instructors/{name}",
    params(("name" = String, Path, description = "Instructor display name")),
    request_body = StatusUpdate,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResult)
    ),
    tag = "Instructors"
)]
#[instrument]
pub async fn update_instructor_status(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<UpdateResult>, AppError> {
    let result =
        InstructorService::set_status(state.store.as_ref(), &name, update.status.as_deref())
            .await?;
    Ok(Json(result))
}
