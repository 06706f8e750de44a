//! BSON / JSON conversion
//!
//! Responses carry stored documents as plain JSON: object ids become hex
//! strings and datetimes become RFC 3339 strings, never extended-JSON
//! wrappers like `{"$oid": ...}`.

use mongodb::bson::{self, Bson, Document};
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Renders a stored document as a JSON object.
pub fn document_to_json(doc: &Document) -> Value {
    let mut map = Map::with_capacity(doc.len());
    for (key, value) in doc {
        map.insert(key.clone(), bson_to_json(value));
    }
    Value::Object(map)
}

/// Renders a list of documents as a JSON array.
pub fn documents_to_json(docs: &[Document]) -> Value {
    Value::Array(docs.iter().map(document_to_json).collect())
}

/// Renders an optional document, mapping a miss to JSON `null`.
///
/// Single-document lookups answer `200` with `null` when nothing matches,
/// so absence is part of the wire format rather than an error.
pub fn optional_document_to_json(doc: Option<&Document>) -> Value {
    match doc {
        Some(doc) => document_to_json(doc),
        None => Value::Null,
    }
}

/// Converts a JSON body into a BSON document for insertion.
///
/// Only objects are accepted; arrays and scalars are malformed input.
pub fn json_to_document(value: &Value) -> Result<Document, StoreError> {
    if !value.is_object() {
        return Err(StoreError::Malformed("expected a JSON object".to_string()));
    }

    bson::to_document(value).map_err(|err| StoreError::Malformed(err.to_string()))
}

fn bson_to_json(value: &Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or(Value::Null),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.iter().map(bson_to_json).collect()),
        Bson::String(s) => Value::String(s.clone()),
        Bson::Boolean(b) => Value::Bool(*b),
        Bson::Int32(n) => Value::from(*n),
        Bson::Int64(n) => Value::from(*n),
        Bson::Double(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Bson::Null => Value::Null,
        // Decimal128, binary and the other exotic types never enter through
        // this API; render them as their display form rather than panicking.
        other => Value::String(other.to_string()),
    }
}
