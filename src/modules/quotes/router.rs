use axum::{Router, routing::get};

use super::controller::get_quotes;
use crate::state::AppState;

pub fn init_quotes_router() -> Router<AppState> {
    Router::new().route("/quotes", get(get_quotes))
}
