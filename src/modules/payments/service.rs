use anyhow::anyhow;
use edumart_store::bson::doc;
use edumart_store::{DocumentStore, FindQuery, InsertResult, documents_to_json, json_to_document};
use serde_json::Value;

use crate::modules::payments::gateway::PaymentGateway;
use crate::modules::payments::model::ClientSecretResponse;
use crate::utils::errors::AppError;

const COLLECTION: &str = "payments";

/// Every intent is created in this currency; the amount is already in
/// minor units by the time the gateway sees it.
const INTENT_CURRENCY: &str = "usd";

pub struct PaymentService;

impl PaymentService {
    pub async fn get_payments_by_learner(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Value, AppError> {
        let payments = store
            .find(COLLECTION, doc! { "learnerEmail": email }, FindQuery::all())
            .await
            .map_err(AppError::store)?;

        Ok(documents_to_json(&payments))
    }

    /// Records a confirmed payment document as the client sent it.
    pub async fn record_payment(
        store: &dyn DocumentStore,
        body: &Value,
    ) -> Result<InsertResult, AppError> {
        let document = json_to_document(body).map_err(AppError::store)?;

        store
            .insert_one(COLLECTION, document)
            .await
            .map_err(AppError::store)
    }

    /// Validates the price and requests an intent from the processor.
    ///
    /// A missing, non-numeric or non-positive price is rejected before the
    /// gateway is consulted. Gateway failures surface as server errors.
    pub async fn create_intent(
        gateway: &dyn PaymentGateway,
        body: &Value,
    ) -> Result<ClientSecretResponse, AppError> {
        let price = body
            .get("price")
            .and_then(Value::as_f64)
            .filter(|price| *price > 0.0)
            .ok_or_else(|| AppError::bad_request(anyhow!("invalid price")))?;

        let amount = to_minor_units(price);
        let intent = gateway
            .create_intent(amount, INTENT_CURRENCY)
            .await
            .map_err(AppError::internal)?;

        Ok(ClientSecretResponse {
            client_secret: intent.client_secret,
        })
    }
}

/// Minor-unit conversion, truncating toward zero: `12.999` becomes `1299`.
fn to_minor_units(price: f64) -> i64 {
    (price * 100.0) as i64
}
