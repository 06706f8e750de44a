use axum::Json;
use axum::extract::{Path, State};
use edumart_store::InsertResult;
use serde_json::Value;
use tracing::instrument;

use super::service::ReviewService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

/// List every review document
#[utoipa::path(
    get,
    path = "/reviews",
    responses(
        (status = 200, description = "All review documents")
    ),
    tag = "Reviews"
)]
#[instrument]
pub async fn get_reviews(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let reviews = ReviewService::get_reviews(state.store.as_ref()).await?;
    Ok(Json(reviews))
}

/// List the reviews referencing a course
#[utoipa::path(
    get,
    path = "/reviews/{id}",
    params(("id" = String, Path, description = "Course id the reviews reference")),
    responses(
        (status = 200, description = "Reviews for the course")
    ),
    tag = "Reviews"
)]
#[instrument]
pub async fn get_course_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let reviews = ReviewService::get_course_reviews(state.store.as_ref(), &id).await?;
    Ok(Json(reviews))
}

/// Store a new review document
#[utoipa::path(
    post,
    path = "/reviews",
    responses(
        (status = 200, description = "Insert acknowledgement", body = InsertResult),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse)
    ),
    tag = "Reviews"
)]
#[instrument]
pub async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<InsertResult>, AppError> {
    let result = ReviewService::create_review(state.store.as_ref(), &body).await?;
    Ok(Json(result))
}
