use axum::{Router, routing::get};

use super::controller::{
    create_instructor, get_instructor, get_instructors, update_instructor_status,
};
use crate::state::AppState;

pub fn init_instructors_router() -> Router<AppState> {
    Router::new()
        .route("/instructors", get(get_instructors).post(create_instructor))
        .route(
            "/instructors/{name}",
            get(get_instructor).patch(update_instructor_status),
        )
}
