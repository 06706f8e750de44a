use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_assignment, get_assignments, update_assignment_submissions};
use crate::state::AppState;

pub fn init_assignments_router() -> Router<AppState> {
    Router::new()
        .route("/assignments", post(create_assignment))
        .route(
            "/assignments/{id}",
            get(get_assignments).patch(update_assignment_submissions),
        )
}
