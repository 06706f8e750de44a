//! Write acknowledgement shapes
//!
//! Mutating endpoints answer with the store's own acknowledgement object,
//! serialized with the camelCase field names JavaScript clients already
//! consume (`insertedId`, `matchedCount`, `deletedCount`, ...).

use mongodb::bson::Bson;
use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement for a single-document insert.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    /// Hex form of the new document's `_id`.
    pub inserted_id: String,
}

impl InsertResult {
    pub fn new(inserted_id: impl Into<String>) -> Self {
        Self {
            acknowledged: true,
            inserted_id: inserted_id.into(),
        }
    }
}

impl From<mongodb::results::InsertOneResult> for InsertResult {
    fn from(result: mongodb::results::InsertOneResult) -> Self {
        Self::new(bson_id_to_string(result.inserted_id))
    }
}

/// Acknowledgement for `update_one` / `update_many`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
    pub upserted_count: u64,
}

impl UpdateResult {
    /// An acknowledgement that touched nothing, used when a patch carries no
    /// fields to apply and the store is never consulted.
    pub fn noop() -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: None,
            upserted_count: 0,
        }
    }
}

impl From<mongodb::results::UpdateResult> for UpdateResult {
    fn from(result: mongodb::results::UpdateResult) -> Self {
        let upserted_id = result.upserted_id.map(bson_id_to_string);
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id,
        }
    }
}

/// Acknowledgement for a single-document delete.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

impl From<mongodb::results::DeleteResult> for DeleteResult {
    fn from(result: mongodb::results::DeleteResult) -> Self {
        Self::new(result.deleted_count)
    }
}

fn bson_id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn insert_result_uses_camel_case_keys() {
        let value = serde_json::to_value(InsertResult::new("65a1b2c3d4e5f6a7b8c9d0e1")).unwrap();

        assert_eq!(
            value,
            json!({ "acknowledged": true, "insertedId": "65a1b2c3d4e5f6a7b8c9d0e1" })
        );
    }

    #[test]
    fn noop_update_reports_zero_counts() {
        let value = serde_json::to_value(UpdateResult::noop()).unwrap();

        assert_eq!(value["acknowledged"], json!(true));
        assert_eq!(value["matchedCount"], json!(0));
        assert_eq!(value["modifiedCount"], json!(0));
        assert_eq!(value["upsertedId"], json!(null));
    }
}
