use axum::{Router, routing::post};

use super::controller::issue_jwt;
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/jwt", post(issue_jwt))
}
