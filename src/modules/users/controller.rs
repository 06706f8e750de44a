use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use edumart_store::{InsertResult, UpdateResult};
use serde_json::Value;
use tracing::instrument;

use super::model::{AdminStatus, CreateUser, DuplicateUser, RoleUpdate, UserInsert};
use super::service::UserService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;

/// List every user document
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All user documents"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn get_users(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let users = UserService::get_users(state.store.as_ref()).await?;
    Ok(Json(users))
}

/// Fetch one user by email
#[utoipa::path(
    get,
    path = "/users/{email}",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User document, or null when unknown"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    _auth_user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let user = UserService::get_user(state.store.as_ref(), &email).await?;
    Ok(Json(user))
}

/// Report whether the caller's account has the admin role
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    params(("email" = String, Path, description = "Email, must match the token's email claim")),
    responses(
        (status = 200, description = "Admin flag", body = AdminStatus),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email does not match the token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn get_admin_status(
    State(state): State<AppState>,
    Path(email): Path<String>,
    auth_user: AuthUser,
) -> Result<Json<AdminStatus>, AppError> {
    auth_user.require_email(&email)?;

    let admin = UserService::is_admin(state.store.as_ref(), &email).await?;
    Ok(Json(AdminStatus { admin }))
}

/// Register a user unless the email is already taken
#[utoipa::path(
    post,
    path = "/users",
    responses(
        (status = 200, description = "Insert acknowledgement, or a duplicate notice with a null insertedId", body = InsertResult),
        (status = 400, description = "Missing email", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(user): ValidatedJson<CreateUser>,
) -> Result<Response, AppError> {
    match UserService::create_user(state.store.as_ref(), user).await? {
        UserInsert::Created(result) => Ok(Json(result).into_response()),
        UserInsert::AlreadyExists => Ok(Json(DuplicateUser::new()).into_response()),
    }
}

/// Set a user's role by email, upserting when the user is unknown
#[utoipa::path(
    patch,
    path = "/users/{email}",
    params(("email" = String, Path, description = "User email")),
    request_body = RoleUpdate,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResult),
        (status = 400, description = "Missing role", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument]
pub async fn update_user_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ValidatedJson(update): ValidatedJson<RoleUpdate>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = UserService::set_role(state.store.as_ref(), &email, &update.role).await?;
    Ok(Json(result))
}
