use edumart_store::bson::doc;
use edumart_store::{DocumentStore, FindQuery, documents_to_json};
use serde_json::Value;

use crate::utils::errors::AppError;

const COLLECTION: &str = "quotes";

pub struct QuoteService;

impl QuoteService {
    pub async fn get_quotes(store: &dyn DocumentStore) -> Result<Value, AppError> {
        let quotes = store
            .find(COLLECTION, doc! {}, FindQuery::all())
            .await
            .map_err(AppError::store)?;

        Ok(documents_to_json(&quotes))
    }
}
