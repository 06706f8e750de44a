//! Document store configuration and connection.
//!
//! The store URI is read from the `MONGODB_URI` environment variable and
//! the database name from `MONGODB_DB`, defaulting to `edumart`.
//!
//! # Environment Variables
//!
//! - `MONGODB_URI`: MongoDB connection string (required)
//! - `MONGODB_DB`: database name (defaults to `edumart`)
//!
//! # Panics
//!
//! [`init_store`] panics if `MONGODB_URI` is not set or the deployment
//! cannot be reached, so a broken configuration fails at startup.

use std::env;
use std::sync::Arc;

use edumart_store::{DocumentStore, MongoStore};

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").expect("MONGODB_URI must be set"),
            database: env::var("MONGODB_DB").unwrap_or_else(|_| "edumart".to_string()),
        }
    }
}

/// Connects to the configured MongoDB deployment and pings it once.
///
/// Called once during startup; the returned handle is shared by every
/// request through the application state.
pub async fn init_store() -> Arc<dyn DocumentStore> {
    let config = StoreConfig::from_env();

    let store = MongoStore::connect(&config.uri, &config.database)
        .await
        .expect("Failed to connect to document store");

    Arc::new(store)
}
