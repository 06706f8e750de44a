use axum::{Router, routing::get};

use super::controller::get_stats;
use crate::state::AppState;

pub fn init_stats_router() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}
