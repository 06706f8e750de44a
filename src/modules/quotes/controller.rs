use axum::Json;
use axum::extract::State;
use serde_json::Value;
use tracing::instrument;

use super::service::QuoteService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// List every quote document
#[utoipa::path(
    get,
    path = "/quotes",
    responses(
        (status = 200, description = "All quote documents")
    ),
    tag = "Quotes"
)]
#[instrument]
pub async fn get_quotes(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let quotes = QuoteService::get_quotes(state.store.as_ref()).await?;
    Ok(Json(quotes))
}
