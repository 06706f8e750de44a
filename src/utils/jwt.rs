use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::{Map, Value};

use crate::config::jwt::{JwtConfig, TOKEN_TTL_SECS};
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

/// Signs the caller-supplied claims object into an access token.
///
/// The payload is taken as-is; only `iat` and `exp` are stamped here, with
/// `exp` fixed at one hour from issuance. Nothing about the claims is
/// checked against the user collection at this point.
pub fn issue_token(claims: &Map<String, Value>, config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let mut payload = claims.clone();
    payload.insert("iat".to_string(), Value::from(now));
    payload.insert("exp".to_string(), Value::from(now + TOKEN_TTL_SECS));

    encode(
        &Header::default(),
        &payload,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|err| AppError::internal(anyhow!("Failed to sign token: {err}")))
}

/// Verifies a token's signature and expiry, returning its claims.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired token")))
}
