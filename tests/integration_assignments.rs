mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{get_auth_token, response_json, setup_memory_app};
use edumart_store::{DocumentStore, MemoryStore};
use edumart_store::bson::doc;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_create_assignment() {
    let store = Arc::new(MemoryStore::new());
    let app = setup_memory_app(store.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/assignments")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "title": "Ownership quiz",
                "courseId": "course-a",
                "marks": 60
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
        .find_one("assignments", doc! { "title": "Ownership quiz" })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.get_str("courseId").unwrap(), "course-a");
}

#[tokio::test]
async fn test_get_assignments_requires_token() {
    let app = setup_memory_app(Arc::new(MemoryStore::new()));

    let request = Request::builder()
        .method("GET")
        .uri("/assignments/course-a")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_assignments_scopes_list_but_sums_every_submission() {
    let store = Arc::new(MemoryStore::new());
    store
        .seed(
            "assignments",
            vec![
                doc! { "title": "A1", "courseId": "course-a", "submitted": 2_i64 },
                doc! { "title": "A2", "courseId": "course-a", "submitted": 1_i64 },
                doc! { "title": "B1", "courseId": "course-b", "submitted": 4_i64 },
                // No counter yet; counts as zero.
                doc! { "title": "C1", "courseId": "course-c" },
            ],
        )
        .await;

    let app = setup_memory_app(store);
    let token = get_auth_token(app.clone(), "ada@test.com").await;

    let request = Request::builder()
        .method("GET")
        .uri("/assignments/course-a")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["assignments"].as_array().unwrap().len(), 2);
    // The headline figure spans the whole collection, not just course-a.
    assert_eq!(body["totalSubmitted"], 7);
}

#[tokio::test]
async fn test_patch_increments_submission_counter() {
    let store = Arc::new(MemoryStore::new());
    let id = store
        .insert_one(
            "assignments",
            doc! { "title": "Ownership quiz", "courseId": "course-a" },
        )
        .await
        .unwrap()
        .inserted_id;

    let app = setup_memory_app(store.clone());

    for delta in [2, 3] {
        let request = Request::builder()
            .method("PATCH")
            .uri(format!("/assignments/{id}"))
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({ "submitted": delta })).unwrap(),
            ))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["matchedCount"], 1);
    }

    let stored = store
        .find_one("assignments", doc! { "title": "Ownership quiz" })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.get_i64("submitted").unwrap(), 5);
}

#[tokio::test]
async fn test_patch_without_delta_materializes_counter_at_zero() {
    let store = Arc::new(MemoryStore::new());
    let id = store
        .insert_one(
            "assignments",
            doc! { "title": "Fresh", "courseId": "course-a" },
        )
        .await
        .unwrap()
        .inserted_id;

    let app = setup_memory_app(store.clone());

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/assignments/{id}"))
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let stored = store
        .find_one("assignments", doc! { "title": "Fresh" })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.get_i64("submitted").unwrap(), 0);
}

#[tokio::test]
async fn test_patch_malformed_id() {
    let app = setup_memory_app(Arc::new(MemoryStore::new()));

    let request = Request::builder()
        .method("PATCH")
        .uri("/assignments/not-an-id")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "submitted": 1 })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
