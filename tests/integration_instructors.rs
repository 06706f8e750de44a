mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    CountingStore, RecordingGateway, generate_unique_email, get_auth_token, response_json,
    seed_user, setup_memory_app, setup_test_app,
};
use edumart_store::{DocumentStore, MemoryStore};
use edumart_store::bson::doc;
use serde_json::json;
use tower::ServiceExt;

async fn seed_instructor(store: &MemoryStore, name: &str, status: &str) {
    store
        .seed(
            "instructors",
            vec![doc! { "instructor": name, "status": status, "expertise": "Systems" }],
        )
        .await;
}

#[tokio::test]
async fn test_list_instructors_requires_token() {
    let app = setup_memory_app(Arc::new(MemoryStore::new()));

    let request = Request::builder()
        .method("GET")
        .uri("/instructors")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_instructors_rejects_non_admin() {
    let store = Arc::new(MemoryStore::new());
    let email = generate_unique_email();
    seed_user(&store, &email, Some("Teacher")).await;

    let app = setup_memory_app(store);
    let token = get_auth_token(app.clone(), &email).await;

    let request = Request::builder()
        .method("GET")
        .uri("/instructors")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response_json(response).await;
    assert_eq!(
        body["error"],
        "Access denied. Administrator privileges required."
    );
}

#[tokio::test]
async fn test_list_instructors_as_admin() {
    let store = Arc::new(MemoryStore::new());
    let email = generate_unique_email();
    seed_user(&store, &email, Some("admin")).await;
    seed_instructor(&store, "Grace Hopper", "approved").await;
    seed_instructor(&store, "Alan Kay", "pending").await;

    let app = setup_memory_app(store);
    let token = get_auth_token(app.clone(), &email).await;

    let request = Request::builder()
        .method("GET")
        .uri("/instructors")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_admin_gate_reads_current_role_from_store() {
    // A token stays valid for an hour, but admin access follows the stored
    // role: demote the user and the same token stops opening the gate.
    let store = Arc::new(MemoryStore::new());
    let email = generate_unique_email();
    seed_user(&store, &email, Some("admin")).await;

    let app = setup_memory_app(store.clone());
    let token = get_auth_token(app.clone(), &email).await;

    let request = Request::builder()
        .method("GET")
        .uri("/instructors")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    store
        .update_one(
            "users",
            doc! { "email": email.as_str() },
            doc! { "$set": { "role": "Student" } },
            false,
        )
        .await
        .unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/instructors")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_get_instructor_by_name() {
    let store = Arc::new(MemoryStore::new());
    let email = generate_unique_email();
    seed_user(&store, &email, None).await;
    seed_instructor(&store, "Grace Hopper", "approved").await;

    let app = setup_memory_app(store);
    let token = get_auth_token(app.clone(), &email).await;

    let request = Request::builder()
        .method("GET")
        .uri("/instructors/Grace%20Hopper")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["instructor"], "Grace Hopper");
    assert_eq!(body["status"], "approved");
}

#[tokio::test]
async fn test_get_unknown_instructor_returns_null() {
    let app = setup_memory_app(Arc::new(MemoryStore::new()));
    let token = get_auth_token(app.clone(), "someone@test.com").await;

    let request = Request::builder()
        .method("GET")
        .uri("/instructors/Nobody")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert!(body.is_null());
}

#[tokio::test]
async fn test_create_instructor() {
    let store = Arc::new(MemoryStore::new());
    let app = setup_memory_app(store.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/instructors")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "instructor": "Barbara Liskov",
                "expertise": "Distributed systems",
                "status": "pending"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["acknowledged"], true);
    assert!(body["insertedId"].is_string());

    let stored = store
        .find_one("instructors", doc! { "instructor": "Barbara Liskov" })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.get_str("status").unwrap(), "pending");
}

#[tokio::test]
async fn test_create_instructor_rejects_non_object_body() {
    let app = setup_memory_app(Arc::new(MemoryStore::new()));

    let request = Request::builder()
        .method("POST")
        .uri("/instructors")
        .header("content-type", "application/json")
        .body(Body::from(r#""just a string""#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_status_touches_every_matching_document() {
    let store = Arc::new(MemoryStore::new());
    seed_instructor(&store, "Grace Hopper", "pending").await;
    seed_instructor(&store, "Grace Hopper", "pending").await;
    seed_instructor(&store, "Alan Kay", "pending").await;

    let app = setup_memory_app(store.clone());

    let request = Request::builder()
        .method("PATCH")
        .uri("/instructors/Grace%20Hopper")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "status": "approved" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["matchedCount"], 2);
    assert_eq!(body["modifiedCount"], 2);

    // The unrelated instructor keeps its status.
    let other = store
        .find_one("instructors", doc! { "instructor": "Alan Kay" })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(other.get_str("status").unwrap(), "pending");
}

#[tokio::test]
async fn test_update_status_without_status_never_touches_the_store() {
    let store = Arc::new(CountingStore::new());
    store
        .seed(
            "instructors",
            vec![doc! { "instructor": "Grace Hopper", "status": "pending" }],
        )
        .await;

    let app = setup_test_app(store.clone(), Arc::new(RecordingGateway::new()));

    let request = Request::builder()
        .method("PATCH")
        .uri("/instructors/Grace%20Hopper")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["matchedCount"], 0);
    assert_eq!(body["modifiedCount"], 0);
    assert_eq!(store.operation_count(), 0);
}
