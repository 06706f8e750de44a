use anyhow::anyhow;
use axum::Json;
use axum::extract::State;
use serde_json::Value;
use tracing::instrument;

use super::model::TokenResponse;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::utils::jwt::issue_token;

/// Issue a signed access token for the posted claims object
#[utoipa::path(
    post,
    path = "/jwt",
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(claims))]
pub async fn issue_jwt(
    State(state): State<AppState>,
    Json(claims): Json<Value>,
) -> Result<Json<TokenResponse>, AppError> {
    let claims = claims
        .as_object()
        .ok_or_else(|| AppError::bad_request(anyhow!("Claims must be a JSON object")))?;

    let token = issue_token(claims, &state.jwt)?;

    Ok(Json(TokenResponse { token }))
}
