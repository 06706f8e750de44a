use axum::{Router, routing::get};

use super::controller::{create_user, get_admin_status, get_user, get_users, update_user_role};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users).post(create_user))
        .route("/users/{email}", get(get_user).patch(update_user_role))
        .route("/users/admin/{email}", get(get_admin_status))
}
