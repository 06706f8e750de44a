//! Store error types

use thiserror::Error;

/// Errors surfaced by [`DocumentStore`](crate::DocumentStore) backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A path or filter value could not be parsed as an object id.
    #[error("invalid document id `{0}`")]
    InvalidId(String),

    /// A JSON body could not be represented as a BSON document.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The underlying driver failed.
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
}
