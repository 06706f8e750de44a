use edumart_store::bson::doc;
use edumart_store::{
    DocumentStore, FindQuery, InsertResult, UpdateResult, documents_to_json, json_to_document,
    optional_document_to_json,
};
use serde_json::Value;

use crate::utils::errors::AppError;

const COLLECTION: &str = "instructors";

/// Instructor documents carry their display name in an `instructor` field;
/// it doubles as the lookup key for the by-name routes.
const NAME_FIELD: &str = "instructor";

pub struct InstructorService;

impl InstructorService {
    pub async fn get_instructors(store: &dyn DocumentStore) -> Result<Value, AppError> {
        let instructors = store
            .find(COLLECTION, doc! {}, FindQuery::all())
            .await
            .map_err(AppError::store)?;

        Ok(documents_to_json(&instructors))
    }

    pub async fn get_instructor(store: &dyn DocumentStore, name: &str) -> Result<Value, AppError> {
        let instructor = store
            .find_one(COLLECTION, doc! { NAME_FIELD: name })
            .await
            .map_err(AppError::store)?;

        Ok(optional_document_to_json(instructor.as_ref()))
    }

    pub async fn create_instructor(
        store: &dyn DocumentStore,
        body: &Value,
    ) -> Result<InsertResult, AppError> {
        let document = json_to_document(body).map_err(AppError::store)?;

        store
            .insert_one(COLLECTION, document)
            .await
            .map_err(AppError::store)
    }

    /// Sets `status` on every instructor document matching `name`.
    ///
    /// Without a status in the body there is nothing to apply, so the store
    /// is not consulted and a zero-count acknowledgement is returned.
    pub async fn set_status(
        store: &dyn DocumentStore,
        name: &str,
        status: Option<&str>,
    ) -> Result<UpdateResult, AppError> {
        let Some(status) = status else {
            return Ok(UpdateResult::noop());
        };

        store
            .update_many(
                COLLECTION,
                doc! { NAME_FIELD: name },
                doc! { "$set": { "status": status } },
            )
            .await
            .map_err(AppError::store)
    }
}
