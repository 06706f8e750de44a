use std::env;

/// Lifetime of every issued access token. Expiry is enforced at
/// verification time only; nothing is revoked server-side.
pub const TOKEN_TTL_SECS: i64 = 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    /// Reads the signing secret from `ACCESS_TOKEN_SECRET`.
    ///
    /// # Panics
    ///
    /// Panics if the variable is unset so a misconfigured deployment fails
    /// at startup rather than issuing unverifiable tokens.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("ACCESS_TOKEN_SECRET").expect("ACCESS_TOKEN_SECRET must be set"),
        }
    }
}
