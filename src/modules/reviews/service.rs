use edumart_store::bson::doc;
use edumart_store::{DocumentStore, FindQuery, InsertResult, documents_to_json, json_to_document};
use serde_json::Value;

use crate::utils::errors::AppError;

const COLLECTION: &str = "reviews";

pub struct ReviewService;

impl ReviewService {
    pub async fn get_reviews(store: &dyn DocumentStore) -> Result<Value, AppError> {
        let reviews = store
            .find(COLLECTION, doc! {}, FindQuery::all())
            .await
            .map_err(AppError::store)?;

        Ok(documents_to_json(&reviews))
    }

    /// Reviews for one course; `course_id` is matched as a plain string.
    pub async fn get_course_reviews(
        store: &dyn DocumentStore,
        course_id: &str,
    ) -> Result<Value, AppError> {
        let reviews = store
            .find(COLLECTION, doc! { "courseId": course_id }, FindQuery::all())
            .await
            .map_err(AppError::store)?;

        Ok(documents_to_json(&reviews))
    }

    pub async fn create_review(
        store: &dyn DocumentStore,
        body: &Value,
    ) -> Result<InsertResult, AppError> {
        let document = json_to_document(body).map_err(AppError::store)?;

        store
            .insert_one(COLLECTION, document)
            .await
            .map_err(AppError::store)
    }
}
