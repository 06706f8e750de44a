use axum::Json;
use axum::extract::{Path, State};
use edumart_store::{InsertResult, UpdateResult};
use serde_json::Value;
use tracing::instrument;

use super::model::{AssignmentListResponse, SubmissionUpdate};
use super::service::AssignmentService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

/// List a course's assignments with the store-wide submission total
#[utoipa::path(
    get,
    path = "/assignments/{id}",
    params(("id" = String, Path, description = "Course id the assignments reference")),
    responses(
        (status = 200, description = "Assignments and total submissions", body = AssignmentListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument]
pub async fn get_assignments(
    State(state): State<AppState>,
    Path(id): Path<String>,
    _auth_user: AuthUser,
) -> Result<Json<AssignmentListResponse>, AppError> {
    let assignments = AssignmentService::for_course(state.store.as_ref(), &id).await?;
    Ok(Json(assignments))
}

/// Store a new assignment document
#[utoipa::path(
    post,
    path = "/assignments",
    responses(
        (status = 200, description = "Insert acknowledgement", body = InsertResult),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse)
    ),
    tag = "Assignments"
)]
#[instrument]
pub async fn create_assignment(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<InsertResult>, AppError> {
    let result = AssignmentService::create_assignment(state.store.as_ref(), &body).await?;
    Ok(Json(result))
}

/// Add to an assignment's submission counter
#[utoipa::path(
    patch,
    path = "/assignments/{id}",
    params(("id" = String, Path, description = "Assignment object id (24-char hex)")),
    request_body = SubmissionUpdate,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResult),
        (status = 400, description = "Malformed id", body = ErrorResponse)
    ),
    tag = "Assignments"
)]
#[instrument]
pub async fn update_assignment_submissions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<SubmissionUpdate>,
) -> Result<Json<UpdateResult>, AppError> {
    let delta = update.submitted.unwrap_or(0);
    let result = AssignmentService::add_submissions(state.store.as_ref(), &id, delta).await?;
    Ok(Json(result))
}
