//! # Edumart Store
//!
//! Document store abstraction for the edumart API.
//!
//! The HTTP layer talks to a [`DocumentStore`] trait object rather than a
//! concrete driver. Two backends implement it:
//!
//! - [`MongoStore`]: the production backend, backed by the `mongodb` driver
//! - [`MemoryStore`]: an in-process backend used by the integration tests
//!
//! Collections hold schemaless BSON documents. The [`json`] module converts
//! between those documents and the JSON bodies the API accepts and returns,
//! rendering object ids as plain hex strings.

pub mod error;
pub mod ids;
pub mod json;
pub mod memory;
pub mod mongo;
pub mod results;
pub mod store;

pub use error::StoreError;
pub use ids::parse_object_id;
pub use json::{document_to_json, documents_to_json, json_to_document, optional_document_to_json};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use results::{DeleteResult, InsertResult, UpdateResult};
pub use store::{DocumentStore, FindQuery};

// Handlers and services build filters with `doc!` and read raw documents, so
// the BSON types ride along with the store API.
pub use mongodb::bson;
