use axum::{Router, routing::get};

use super::controller::{create_review, get_course_reviews, get_reviews};
use crate::state::AppState;

pub fn init_reviews_router() -> Router<AppState> {
    Router::new()
        .route("/reviews", get(get_reviews).post(create_review))
        .route("/reviews/{id}", get(get_course_reviews))
}
