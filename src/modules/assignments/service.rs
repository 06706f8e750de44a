use edumart_store::bson::{Bson, Document, doc};
use edumart_store::{
    DocumentStore, FindQuery, InsertResult, UpdateResult, documents_to_json, json_to_document,
    parse_object_id,
};
use serde_json::Value;

use crate::modules::assignments::model::AssignmentListResponse;
use crate::utils::errors::AppError;

const COLLECTION: &str = "assignments";
const SUBMITTED_FIELD: &str = "submitted";

pub struct AssignmentService;

impl AssignmentService {
    /// Assignments for one course, plus the store-wide submission total.
    ///
    /// `course_id` is matched as the plain string the assignment was
    /// created with, not as an object id.
    pub async fn for_course(
        store: &dyn DocumentStore,
        course_id: &str,
    ) -> Result<AssignmentListResponse, AppError> {
        let assignments = store
            .find(COLLECTION, doc! { "courseId": course_id }, FindQuery::all())
            .await
            .map_err(AppError::store)?;

        let all = store
            .find(COLLECTION, doc! {}, FindQuery::all())
            .await
            .map_err(AppError::store)?;
        let total_submitted = all.iter().map(submitted_count).sum();

        Ok(AssignmentListResponse {
            assignments: documents_to_json(&assignments),
            total_submitted,
        })
    }

    pub async fn create_assignment(
        store: &dyn DocumentStore,
        body: &Value,
    ) -> Result<InsertResult, AppError> {
        let document = json_to_document(body).map_err(AppError::store)?;

        store
            .insert_one(COLLECTION, document)
            .await
            .map_err(AppError::store)
    }

    /// Adds `delta` to an assignment's submission counter via `$inc`.
    pub async fn add_submissions(
        store: &dyn DocumentStore,
        id: &str,
        delta: i64,
    ) -> Result<UpdateResult, AppError> {
        let oid = parse_object_id(id).map_err(AppError::store)?;

        store
            .update_one(
                COLLECTION,
                doc! { "_id": oid },
                doc! { "$inc": { SUBMITTED_FIELD: delta } },
                false,
            )
            .await
            .map_err(AppError::store)
    }
}

/// An absent or non-numeric counter counts as zero.
fn submitted_count(doc: &Document) -> i64 {
    match doc.get(SUBMITTED_FIELD) {
        Some(Bson::Int32(n)) => i64::from(*n),
        Some(Bson::Int64(n)) => *n,
        Some(Bson::Double(n)) => *n as i64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use edumart_store::bson::doc;

    use super::*;

    #[test]
    fn submitted_count_defaults_to_zero() {
        assert_eq!(submitted_count(&doc! { "title": "quiz" }), 0);
        assert_eq!(submitted_count(&doc! { "submitted": "three" }), 0);
    }

    #[test]
    fn submitted_count_reads_any_numeric_width() {
        assert_eq!(submitted_count(&doc! { "submitted": 4_i32 }), 4);
        assert_eq!(submitted_count(&doc! { "submitted": 4_i64 }), 4);
        assert_eq!(submitted_count(&doc! { "submitted": 4.9_f64 }), 4);
    }
}
