//! The `DocumentStore` trait

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::error::StoreError;
use crate::results::{DeleteResult, InsertResult, UpdateResult};

/// Window applied to a `find`, mirroring the driver's skip/limit options.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindQuery {
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

impl FindQuery {
    /// A query returning every matching document in insertion order.
    pub fn all() -> Self {
        Self::default()
    }

    /// A query returning `limit` documents after skipping `skip`.
    pub fn window(skip: u64, limit: i64) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }
}

/// Backend-neutral access to named collections of BSON documents.
///
/// Filters are plain equality documents (`doc! { "email": ... }`), updates
/// are restricted to the `$set` and `$inc` operators, and every mutation
/// answers with the same acknowledgement shape the wire format exposes.
/// Handlers hold an `Arc<dyn DocumentStore>`, so the HTTP layer runs
/// unchanged against [`MongoStore`](crate::MongoStore) in production and
/// [`MemoryStore`](crate::MemoryStore) in tests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the documents matching `filter`, windowed by `query`.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        query: FindQuery,
    ) -> Result<Vec<Document>, StoreError>;

    /// Returns the first document matching `filter`, if any.
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Inserts one document, assigning an `_id` when the document has none.
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertResult, StoreError>;

    /// Applies `update` to the first document matching `filter`.
    ///
    /// With `upsert` set, a miss inserts a new document built from the
    /// filter's equality fields and the update's operators.
    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> Result<UpdateResult, StoreError>;

    /// Applies `update` to every document matching `filter`.
    async fn update_many(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<UpdateResult, StoreError>;

    /// Deletes the first document matching `filter`.
    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteResult, StoreError>;

    /// Estimated number of documents in `collection`.
    async fn count(&self, collection: &str) -> Result<u64, StoreError>;
}
