use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that verifies the bearer token and provides its claims.
///
/// Tokens carry whatever claims object the client had signed at `/jwt`,
/// so the only claim handlers can rely on is `email`, and even that is
/// optional. Route-level checks are built on top of this extractor.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The `email` claim, when the signed payload carried one.
    pub fn email(&self) -> Option<&str> {
        self.0.email.as_deref()
    }

    /// Rejects callers whose token was issued for a different email.
    ///
    /// Owner-scoped listings compare the path parameter against the token
    /// claim so one learner cannot read another's records.
    pub fn require_email(&self, email: &str) -> Result<(), AppError> {
        if self.email() == Some(email) {
            Ok(())
        } else {
            Err(AppError::forbidden(anyhow!("Forbidden access")))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized(anyhow!("Missing authorization header")))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid authorization header format")))?;

        let claims = verify_token(token, &state.jwt)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Map;

    use super::*;

    fn claims_with_email(email: Option<&str>) -> Claims {
        Claims {
            email: email.map(str::to_string),
            exp: 9999999999,
            iat: 1234567890,
            extra: Map::new(),
        }
    }

    #[test]
    fn matching_email_passes() {
        let auth_user = AuthUser(claims_with_email(Some("ada@edumart.dev")));
        assert!(auth_user.require_email("ada@edumart.dev").is_ok());
    }

    #[test]
    fn mismatched_email_is_forbidden() {
        let auth_user = AuthUser(claims_with_email(Some("ada@edumart.dev")));
        let err = auth_user.require_email("eve@edumart.dev").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn token_without_email_claim_is_forbidden() {
        let auth_user = AuthUser(claims_with_email(None));
        assert!(auth_user.require_email("ada@edumart.dev").is_err());
    }
}
