use axum::Json;
use axum::extract::State;
use serde_json::Value;
use tracing::instrument;

use super::service::SponsorService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// List every sponsor document
#[utoipa::path(
    get,
    path = "/sponsors",
    responses(
        (status = 200, description = "All sponsor documents")
    ),
    tag = "Sponsors"
)]
#[instrument]
pub async fn get_sponsors(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let sponsors = SponsorService::get_sponsors(state.store.as_ref()).await?;
    Ok(Json(sponsors))
}
