use axum::{Router, routing::get};

use super::controller::get_sponsors;
use crate::state::AppState;

pub fn init_sponsors_router() -> Router<AppState> {
    Router::new().route("/sponsors", get(get_sponsors))
}
