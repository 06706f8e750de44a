use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::bail;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use edumart::config::cors::CorsConfig;
use edumart::config::jwt::JwtConfig;
use edumart::modules::payments::gateway::{PaymentGateway, PaymentIntent};
use edumart::router::init_router;
use edumart::state::AppState;
use edumart_store::bson::{Document, doc};
use edumart_store::{
    DeleteResult, DocumentStore, FindQuery, InsertResult, MemoryStore, StoreError, UpdateResult,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes";

/// Canned client secret handed out by [`RecordingGateway`].
#[allow(dead_code)]
pub const TEST_CLIENT_SECRET: &str = "pi_test_secret_k3y";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
    }
}

/// Builds the real router over the given backends, mirroring
/// `init_app_state` without reading the environment.
pub fn setup_test_app(store: Arc<dyn DocumentStore>, payments: Arc<dyn PaymentGateway>) -> Router {
    let state = AppState {
        store,
        payments,
        jwt: test_jwt_config(),
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    };
    init_router(state)
}

/// Router over a plain memory store with a recording payment gateway.
#[allow(dead_code)]
pub fn setup_memory_app(store: Arc<MemoryStore>) -> Router {
    setup_test_app(store, Arc::new(RecordingGateway::new()))
}

/// Payment gateway double: records every intent request instead of calling
/// out, or fails every request when built with [`RecordingGateway::failing`].
pub struct RecordingGateway {
    calls: Mutex<Vec<(i64, String)>>,
    fail: bool,
}

#[allow(dead_code)]
impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub async fn calls(&self) -> Vec<(i64, String)> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn create_intent(&self, amount: i64, currency: &str) -> anyhow::Result<PaymentIntent> {
        if self.fail {
            bail!("payment processor unavailable");
        }

        self.calls.lock().await.push((amount, currency.to_string()));

        Ok(PaymentIntent {
            id: "pi_test".to_string(),
            client_secret: TEST_CLIENT_SECRET.to_string(),
        })
    }
}

/// Store wrapper counting every operation, used to prove that rejected
/// requests never reach the store.
pub struct CountingStore {
    inner: MemoryStore,
    operations: AtomicUsize,
}

#[allow(dead_code)]
impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            operations: AtomicUsize::new(0),
        }
    }

    pub fn operation_count(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    /// Seeds the wrapped store without advancing the operation count.
    pub async fn seed(&self, collection: &str, documents: Vec<Document>) {
        self.inner.seed(collection, documents).await;
    }

    fn record(&self) {
        self.operations.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        query: FindQuery,
    ) -> Result<Vec<Document>, StoreError> {
        self.record();
        self.inner.find(collection, filter, query).await
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        self.record();
        self.inner.find_one(collection, filter).await
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertResult, StoreError> {
        self.record();
        self.inner.insert_one(collection, document).await
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> Result<UpdateResult, StoreError> {
        self.record();
        self.inner
            .update_one(collection, filter, update, upsert)
            .await
    }

    async fn update_many(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<UpdateResult, StoreError> {
        self.record();
        self.inner.update_many(collection, filter, update).await
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteResult, StoreError> {
        self.record();
        self.inner.delete_one(collection, filter).await
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        self.record();
        self.inner.count(collection).await
    }
}

/// Issues a token for `email` through the real `/jwt` route.
pub async fn get_auth_token(app: Router, email: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "email": email }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    body["token"].as_str().unwrap().to_string()
}

/// Collects a response body into JSON.
pub async fn response_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Response body was not JSON: {:?}",
            String::from_utf8_lossy(&body)
        )
    })
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub async fn seed_user(store: &MemoryStore, email: &str, role: Option<&str>) {
    let mut user = doc! { "email": email, "name": "Test User" };
    if let Some(role) = role {
        user.insert("role", role);
    }
    store.seed("users", vec![user]).await;
}

#[allow(dead_code)]
pub async fn seed_course(store: &MemoryStore, title: &str, status: &str, owner: &str) -> String {
    store
        .insert_one(
            "courses",
            doc! { "title": title, "status": status, "email": owner, "price": 49.99 },
        )
        .await
        .unwrap()
        .inserted_id
}
