use axum::{Router, routing::get};

use super::controller::{
    count_courses, create_course, delete_course, get_course, get_courses_by_owner, list_courses,
    update_course,
};
use crate::state::AppState;

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).patch(update_course).delete(delete_course),
        )
        .route("/courses/user/{email}", get(get_courses_by_owner))
        .route("/totalCourses", get(count_courses))
}
