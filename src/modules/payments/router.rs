use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_payment, create_payment_intent, get_payments};
use crate::state::AppState;

pub fn init_payments_router() -> Router<AppState> {
    Router::new()
        .route("/payments", post(create_payment))
        .route("/payments/{email}", get(get_payments))
        .route("/create-payment-intent", post(create_payment_intent))
}
