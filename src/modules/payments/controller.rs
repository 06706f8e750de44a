use axum::Json;
use axum::extract::{Path, State};
use edumart_store::InsertResult;
use serde_json::Value;
use tracing::instrument;

use super::model::ClientSecretResponse;
use super::service::PaymentService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

/// List a learner's payments
#[utoipa::path(
    get,
    path = "/payments/{email}",
    params(("email" = String, Path, description = "Learner email")),
    responses(
        (status = 200, description = "Payments recorded for the learner"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument]
pub async fn get_payments(
    State(state): State<AppState>,
    Path(email): Path<String>,
    _auth_user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let payments = PaymentService::get_payments_by_learner(state.store.as_ref(), &email).await?;
    Ok(Json(payments))
}

/// Record a confirmed payment
#[utoipa::path(
    post,
    path = "/payments",
    responses(
        (status = 200, description = "Insert acknowledgement", body = InsertResult),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse)
    ),
    tag = "Payments"
)]
#[instrument]
pub async fn create_payment(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<InsertResult>, AppError> {
    let result = PaymentService::record_payment(state.store.as_ref(), &body).await?;
    Ok(Json(result))
}

/// Create a payment intent for a course price
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    responses(
        (status = 200, description = "Client secret for the new intent", body = ClientSecretResponse),
        (status = 400, description = "Missing or invalid price", body = ErrorResponse),
        (status = 500, description = "Payment processor failure", body = ErrorResponse)
    ),
    tag = "Payments"
)]
#[instrument]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ClientSecretResponse>, AppError> {
    let secret = PaymentService::create_intent(state.payments.as_ref(), &body).await?;
    Ok(Json(secret))
}
