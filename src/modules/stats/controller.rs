use axum::Json;
use axum::extract::State;
use tracing::instrument;

use super::model::StatsResponse;
use super::service::StatsService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

/// Platform-wide totals for users, courses, learners and teachers
#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Marketplace totals", body = StatsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Stats"
)]
#[instrument]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = StatsService::get_stats(state.store.as_ref()).await?;
    Ok(Json(stats))
}
