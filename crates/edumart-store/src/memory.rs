//! In-memory backend
//!
//! Collections live in a `RwLock<HashMap>` and documents keep insertion
//! order, which is the order an unindexed find returns them in. The update
//! language is the `$set` / `$inc` subset the API actually issues; anything
//! else is rejected rather than silently dropped.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::results::{DeleteResult, InsertResult, UpdateResult};
use crate::store::{DocumentStore, FindQuery};

/// In-process [`DocumentStore`] used by the integration tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a collection, assigning ids to documents without one.
    pub async fn seed(&self, collection: &str, documents: Vec<Document>) {
        let mut collections = self.collections.write().await;
        let entries = collections.entry(collection.to_string()).or_default();
        for mut document in documents {
            ensure_id(&mut document);
            entries.push(document);
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        query: FindQuery,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let skip = query.skip.unwrap_or(0) as usize;
        let limit = query.limit.map(|l| l.max(0) as usize).unwrap_or(usize::MAX);

        let docs = collections
            .get(collection)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|doc| matches_filter(doc, &filter))
                    .skip(skip)
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(docs)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        let doc = collections
            .get(collection)
            .and_then(|entries| entries.iter().find(|doc| matches_filter(doc, &filter)))
            .cloned();

        Ok(doc)
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<InsertResult, StoreError> {
        let id = ensure_id(&mut document);

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(InsertResult::new(id))
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> Result<UpdateResult, StoreError> {
        let mut collections = self.collections.write().await;
        let entries = collections.entry(collection.to_string()).or_default();

        if let Some(doc) = entries.iter_mut().find(|doc| matches_filter(doc, &filter)) {
            let modified = apply_update(doc, &update)?;
            return Ok(UpdateResult {
                acknowledged: true,
                matched_count: 1,
                modified_count: u64::from(modified),
                upserted_id: None,
                upserted_count: 0,
            });
        }

        if !upsert {
            return Ok(UpdateResult {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
                upserted_id: None,
                upserted_count: 0,
            });
        }

        // Upsert: the new document starts from the filter's equality fields,
        // then the update operators run against it.
        let mut document = filter;
        apply_update(&mut document, &update)?;
        let id = ensure_id(&mut document);
        entries.push(document);

        Ok(UpdateResult {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id),
            upserted_count: 1,
        })
    }

    async fn update_many(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<UpdateResult, StoreError> {
        let mut collections = self.collections.write().await;
        let entries = collections.entry(collection.to_string()).or_default();

        let mut matched = 0;
        let mut modified = 0;
        for doc in entries.iter_mut().filter(|doc| matches_filter(doc, &filter)) {
            matched += 1;
            if apply_update(doc, &update)? {
                modified += 1;
            }
        }

        Ok(UpdateResult {
            acknowledged: true,
            matched_count: matched,
            modified_count: modified,
            upserted_id: None,
            upserted_count: 0,
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteResult, StoreError> {
        let mut collections = self.collections.write().await;
        let entries = collections.entry(collection.to_string()).or_default();

        let deleted = match entries.iter().position(|doc| matches_filter(doc, &filter)) {
            Some(index) => {
                entries.remove(index);
                1
            }
            None => 0,
        };

        Ok(DeleteResult::new(deleted))
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        let collections = self.collections.read().await;
        let count = collections
            .get(collection)
            .map(|entries| entries.len() as u64)
            .unwrap_or(0);

        Ok(count)
    }
}

fn matches_filter(doc: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| doc.get(key) == Some(expected))
}

/// Applies a `$set` / `$inc` update document, reporting whether anything
/// actually changed.
fn apply_update(doc: &mut Document, update: &Document) -> Result<bool, StoreError> {
    let mut modified = false;

    for (operator, fields) in update {
        let fields = fields
            .as_document()
            .ok_or_else(|| StoreError::Malformed(format!("`{operator}` expects a document")))?;

        match operator.as_str() {
            "$set" => {
                for (key, value) in fields {
                    if doc.get(key) != Some(value) {
                        doc.insert(key.clone(), value.clone());
                        modified = true;
                    }
                }
            }
            "$inc" => {
                for (key, delta) in fields {
                    let delta = numeric(delta).ok_or_else(|| {
                        StoreError::Malformed(format!("`$inc` on `{key}` needs a number"))
                    })?;
                    let updated = increment(doc.get(key), delta);
                    if doc.get(key) != Some(&updated) {
                        doc.insert(key.clone(), updated);
                        modified = true;
                    }
                }
            }
            other => {
                return Err(StoreError::Malformed(format!(
                    "unsupported update operator `{other}`"
                )));
            }
        }
    }

    Ok(modified)
}

fn numeric(value: &Bson) -> Option<i64> {
    match value {
        Bson::Int32(n) => Some(i64::from(*n)),
        Bson::Int64(n) => Some(*n),
        Bson::Double(n) => Some(*n as i64),
        _ => None,
    }
}

fn increment(current: Option<&Bson>, delta: i64) -> Bson {
    match current {
        Some(Bson::Int32(n)) => Bson::Int64(i64::from(*n) + delta),
        Some(Bson::Int64(n)) => Bson::Int64(*n + delta),
        Some(Bson::Double(n)) => Bson::Double(*n + delta as f64),
        // Absent or non-numeric: `$inc` materializes the counter.
        _ => Bson::Int64(delta),
    }
}

fn ensure_id(document: &mut Document) -> String {
    match document.get("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => other.to_string(),
        None => {
            let oid = ObjectId::new();
            document.insert("_id", oid);
            oid.to_hex()
        }
    }
}
