use edumart_store::bson::doc;
use edumart_store::{DocumentStore, FindQuery, documents_to_json};
use serde_json::Value;

use crate::utils::errors::AppError;

const COLLECTION: &str = "sponsors";

pub struct SponsorService;

impl SponsorService {
    pub async fn get_sponsors(store: &dyn DocumentStore) -> Result<Value, AppError> {
        let sponsors = store
            .find(COLLECTION, doc! {}, FindQuery::all())
            .await
            .map_err(AppError::store)?;

        Ok(documents_to_json(&sponsors))
    }
}
