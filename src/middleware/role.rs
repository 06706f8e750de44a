//! Admin authorization
//!
//! Admin status lives on the user document, not in the token. The
//! [`RequireAdmin`] extractor therefore verifies the bearer token first,
//! then reads the caller's user record by the token's `email` claim and
//! checks its `role` field. A token minted before a demotion stops
//! working as soon as the stored role changes.

use anyhow::anyhow;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;

const ADMIN_ROLE: &str = "admin";

/// Extractor for admin-only routes.
///
/// Wraps the authenticated caller so handlers can still reach the claims:
///
/// ```ignore
/// async fn list_users(RequireAdmin(auth_user): RequireAdmin) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        let email = auth_user.email().ok_or_else(|| {
            AppError::forbidden(anyhow!("Access denied. Administrator privileges required."))
        })?;

        let user = UserService::find_by_email(state.store.as_ref(), email).await?;
        let is_admin = user
            .as_ref()
            .and_then(|doc| doc.get_str("role").ok())
            .is_some_and(|role| role == ADMIN_ROLE);

        if !is_admin {
            return Err(AppError::forbidden(anyhow!(
                "Access denied. Administrator privileges required."
            )));
        }

        Ok(RequireAdmin(auth_user))
    }
}
