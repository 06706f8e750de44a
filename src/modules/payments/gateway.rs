//! Payment processor client
//!
//! Intents are created against Stripe's `/v1/payment_intents` endpoint.
//! The trait seam lets tests substitute a recording gateway and assert
//! that invalid prices never reach the processor.

use anyhow::bail;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use crate::config::payment::PaymentConfig;

/// A created intent, reduced to the fields this API forwards.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates an intent for `amount` minor units of `currency`.
    async fn create_intent(&self, amount: i64, currency: &str) -> anyhow::Result<PaymentIntent>;
}

#[derive(Debug, Deserialize)]
struct IntentResponse {
    id: String,
    client_secret: String,
}

/// Production [`PaymentGateway`] speaking Stripe's form-encoded API.
#[derive(Debug, Clone)]
pub struct StripeGateway {
    http: reqwest::Client,
    config: PaymentConfig,
}

impl StripeGateway {
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self))]
    async fn create_intent(&self, amount: i64, currency: &str) -> anyhow::Result<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.config.api_base);
        let form = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("payment processor rejected intent request ({status}): {body}");
        }

        let intent: IntentResponse = response.json().await?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}
