use serde::Serialize;
use utoipa::ToSchema;

/// Response for `POST /create-payment-intent`.
///
/// The secret completes the charge client-side; the intent itself is not
/// persisted here. The client records the payment through `POST /payments`
/// once the processor confirms.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClientSecretResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}
