use std::env;

#[derive(Clone)]
pub struct PaymentConfig {
    pub secret_key: String,
    pub api_base: String,
}

impl PaymentConfig {
    /// Reads the processor credentials from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `STRIPE_SECRET_KEY` is not set. `STRIPE_API_BASE` defaults
    /// to the live endpoint and is only overridden in tests.
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("STRIPE_SECRET_KEY").expect("STRIPE_SECRET_KEY must be set"),
            api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
        }
    }
}

impl std::fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("secret_key", &"[redacted]")
            .field("api_base", &self.api_base)
            .finish()
    }
}
