use edumart_store::bson::{Document, doc};
use edumart_store::{
    DeleteResult, DocumentStore, FindQuery, InsertResult, UpdateResult, documents_to_json,
    json_to_document, optional_document_to_json, parse_object_id,
};
use serde_json::Value;

use crate::modules::courses::model::{CourseListResponse, CourseUpdate};
use crate::utils::errors::AppError;
use crate::utils::pagination::PageWindow;

const COLLECTION: &str = "courses";
const ACCEPTED_STATUS: &str = "Accepted";
const ENROLLMENT_FIELD: &str = "numOfTotalEnrollment";

pub struct CourseService;

impl CourseService {
    /// The dual-result course listing: all accepted courses, plus the
    /// requested window over every course.
    pub async fn list(
        store: &dyn DocumentStore,
        window: PageWindow,
    ) -> Result<CourseListResponse, AppError> {
        let accepted = store
            .find(
                COLLECTION,
                doc! { "status": ACCEPTED_STATUS },
                FindQuery::all(),
            )
            .await
            .map_err(AppError::store)?;

        let paginated = store
            .find(
                COLLECTION,
                doc! {},
                FindQuery::window(window.skip, window.limit),
            )
            .await
            .map_err(AppError::store)?;

        Ok(CourseListResponse {
            courses: documents_to_json(&accepted),
            paginated_courses: documents_to_json(&paginated),
        })
    }

    pub async fn count(store: &dyn DocumentStore) -> Result<u64, AppError> {
        store.count(COLLECTION).await.map_err(AppError::store)
    }

    pub async fn get_course(store: &dyn DocumentStore, id: &str) -> Result<Value, AppError> {
        let oid = parse_object_id(id).map_err(AppError::store)?;
        let course = store
            .find_one(COLLECTION, doc! { "_id": oid })
            .await
            .map_err(AppError::store)?;

        Ok(optional_document_to_json(course.as_ref()))
    }

    pub async fn get_courses_by_owner(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Value, AppError> {
        let courses = store
            .find(COLLECTION, doc! { "email": email }, FindQuery::all())
            .await
            .map_err(AppError::store)?;

        Ok(documents_to_json(&courses))
    }

    pub async fn create_course(
        store: &dyn DocumentStore,
        body: &Value,
    ) -> Result<InsertResult, AppError> {
        let document = json_to_document(body).map_err(AppError::store)?;

        store
            .insert_one(COLLECTION, document)
            .await
            .map_err(AppError::store)
    }

    /// Partial course update.
    ///
    /// Present fields go into one `$set`; the enrollment delta goes through
    /// `$inc` so concurrent patches cannot lose increments. A patch without
    /// a delta still sends `$inc: 0`, which materializes an absent counter
    /// at zero and otherwise changes nothing.
    pub async fn update_course(
        store: &dyn DocumentStore,
        id: &str,
        patch: CourseUpdate,
    ) -> Result<UpdateResult, AppError> {
        let oid = parse_object_id(id).map_err(AppError::store)?;

        let mut set = Document::new();
        if let Some(title) = patch.title {
            set.insert("title", title);
        }
        if let Some(price) = patch.price {
            set.insert("price", price);
        }
        if let Some(description) = patch.description {
            set.insert("description", description);
        }
        if let Some(image) = patch.image {
            set.insert("image", image);
        }
        if let Some(status) = patch.status {
            set.insert("status", status);
        }

        let mut update = doc! { "$inc": { ENROLLMENT_FIELD: patch.enrollment.unwrap_or(0) } };
        if !set.is_empty() {
            update.insert("$set", set);
        }

        store
            .update_one(COLLECTION, doc! { "_id": oid }, update, false)
            .await
            .map_err(AppError::store)
    }

    pub async fn delete_course(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<DeleteResult, AppError> {
        let oid = parse_object_id(id).map_err(AppError::store)?;

        store
            .delete_one(COLLECTION, doc! { "_id": oid })
            .await
            .map_err(AppError::store)
    }
}
