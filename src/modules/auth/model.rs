use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Claims carried by a verified bearer token.
///
/// Tokens are signed over whatever object the client posted to `/jwt`, so
/// every claim except the expiry stamps is optional. `email` is the one
/// claim the authorization layer reads; everything else rides in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: usize,
    #[serde(default)]
    pub iat: usize,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response for `POST /jwt`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}
