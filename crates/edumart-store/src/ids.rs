//! Object id parsing

use mongodb::bson::oid::ObjectId;

use crate::error::StoreError;

/// Parses a 24-character hex string into an [`ObjectId`].
///
/// Route handlers call this on `:id` path parameters before building an
/// `_id` filter, so a garbled id is rejected before it reaches a backend.
pub fn parse_object_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}
