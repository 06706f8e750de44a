//! MongoDB backend

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::error::StoreError;
use crate::results::{DeleteResult, InsertResult, UpdateResult};
use crate::store::{DocumentStore, FindQuery};

/// Production [`DocumentStore`] backed by a MongoDB database.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connects to `uri` and pings the named database once so a bad
    /// deployment fails at startup instead of on the first request.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database);

        database.run_command(doc! { "ping": 1 }).await?;
        info!(database = %database.name(), "Pinged your deployment. You successfully connected to MongoDB!");

        Ok(Self { database })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        query: FindQuery,
    ) -> Result<Vec<Document>, StoreError> {
        let coll = self.collection(collection);
        let mut find = coll.find(filter);
        if let Some(skip) = query.skip {
            find = find.skip(skip);
        }
        if let Some(limit) = query.limit {
            find = find.limit(limit);
        }

        let docs = find.await?.try_collect().await?;
        Ok(docs)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        let doc = self.collection(collection).find_one(filter).await?;
        Ok(doc)
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertResult, StoreError> {
        let result = self.collection(collection).insert_one(document).await?;
        Ok(result.into())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> Result<UpdateResult, StoreError> {
        let result = self
            .collection(collection)
            .update_one(filter, update)
            .upsert(upsert)
            .await?;
        Ok(result.into())
    }

    async fn update_many(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<UpdateResult, StoreError> {
        let result = self
            .collection(collection)
            .update_many(filter, update)
            .await?;
        Ok(result.into())
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteResult, StoreError> {
        let result = self.collection(collection).delete_one(filter).await?;
        Ok(result.into())
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        let count = self.collection(collection).estimated_document_count().await?;
        Ok(count)
    }
}
