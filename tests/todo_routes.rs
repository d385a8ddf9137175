use std::collections::HashSet;

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use todo_api::test_helpers::test_router;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should succeed");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    (status, body.to_vec())
}

async fn json_response(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, request).await;
    let json = serde_json::from_slice(&body).expect("body should be json");
    (status, json)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create_todo(app: &Router, title: &str) -> serde_json::Value {
    let (status, todo) = json_response(
        app,
        json_request("POST", "/api/todos", json!({ "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    todo
}

#[tokio::test]
async fn todo_lifecycle() {
    let app = test_router();

    let created = create_todo(&app, "Buy milk").await;
    let id = created["id"].as_i64().expect("id should be generated");
    assert_eq!(created["title"], "Buy milk");
    assert_eq!(created["completed"], false);

    let (status, fetched) = json_response(&app, empty_request("GET", &format!("/api/todos/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Buy milk");

    let (status, updated) = json_response(
        &app,
        json_request(
            "PUT",
            &format!("/api/todos/{id}"),
            json!({ "title": "Buy oat milk" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Buy oat milk");
    assert_eq!(updated["id"].as_i64(), Some(id));

    let (status, body) = send(&app, empty_request("DELETE", &format!("/api/todos/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, missing) = json_response(&app, empty_request("GET", &format!("/api/todos/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["message"], "Todo not found");

    let (status, _) = send(&app, empty_request("DELETE", &format!("/api/todos/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn get_unknown_todo_is_not_found() {
    let app = test_router();

    let (status, json) = json_response(&app, empty_request("GET", "/api/todos/12345")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
    assert_eq!(json["message"], "Todo not found");
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn list_returns_every_saved_todo_once() {
    let app = test_router();
    let mut expected = HashSet::new();
    for title in ["Todo 1", "Todo 2", "Todo 3"] {
        let todo = create_todo(&app, title).await;
        expected.insert(todo["id"].as_i64().unwrap());
    }
    let removed = create_todo(&app, "Todo 4").await["id"].as_i64().unwrap();
    send(&app, empty_request("DELETE", &format!("/api/todos/{removed}"))).await;

    let (status, todos) = json_response(&app, empty_request("GET", "/api/todos")).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = todos
        .as_array()
        .expect("list should be an array")
        .iter()
        .map(|todo| todo["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), expected.len());
    assert_eq!(ids.into_iter().collect::<HashSet<_>>(), expected);
}

#[tokio::test]
async fn list_is_empty_initially() {
    let app = test_router();

    let (status, todos) = json_response(&app, empty_request("GET", "/api/todos")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(todos, json!([]));
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let app = test_router();
    let first = create_todo(&app, "first").await;

    let (status, created) = json_response(
        &app,
        json_request(
            "POST",
            "/api/todos",
            json!({ "id": first["id"], "title": "second", "completed": true }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["id"], first["id"]);
    assert_eq!(created["completed"], true);

    let (_, original) = json_response(
        &app,
        empty_request("GET", &format!("/api/todos/{}", first["id"])),
    )
    .await;
    assert_eq!(original["title"], "first");
}

#[tokio::test]
async fn create_accepts_null_id() {
    let app = test_router();

    let (status, created) = json_response(
        &app,
        json_request("POST", "/api/todos", json!({ "id": null, "title": "null id" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].as_i64().is_some());
}

#[tokio::test]
async fn update_uses_path_id_over_body_id() {
    let app = test_router();
    let target = create_todo(&app, "target").await;
    let other = create_todo(&app, "other").await;
    let target_id = target["id"].as_i64().unwrap();

    let (status, updated) = json_response(
        &app,
        json_request(
            "PUT",
            &format!("/api/todos/{target_id}"),
            json!({ "id": other["id"], "title": "replaced", "completed": true }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"].as_i64(), Some(target_id));
    assert_eq!(updated["completed"], true);

    let (_, untouched) = json_response(
        &app,
        empty_request("GET", &format!("/api/todos/{}", other["id"])),
    )
    .await;
    assert_eq!(untouched["title"], "other");
}

#[tokio::test]
async fn update_replaces_the_whole_record() {
    let app = test_router();
    let (_, created) = json_response(
        &app,
        json_request("POST", "/api/todos", json!({ "title": "done", "completed": true })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (_, updated) = json_response(
        &app,
        json_request("PUT", &format!("/api/todos/{id}"), json!({ "title": "redo" })),
    )
    .await;

    assert_eq!(updated["completed"], false);
}

#[tokio::test]
async fn update_of_unknown_id_stores_it_under_that_id() {
    let app = test_router();

    let (status, updated) = json_response(
        &app,
        json_request("PUT", "/api/todos/77", json!({ "title": "late" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 77);

    let (status, fetched) = json_response(&app, empty_request("GET", "/api/todos/77")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "late");
}

#[tokio::test]
async fn update_rejects_non_positive_id() {
    let app = test_router();

    let (status, json) = json_response(
        &app,
        json_request("PUT", "/api/todos/0", json!({ "title": "zero" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn non_numeric_id_is_a_json_bad_request() {
    let app = test_router();

    let (status, json) = json_response(&app, empty_request("GET", "/api/todos/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn malformed_body_is_rejected_with_json_error() {
    let app = test_router();

    let (status, json) = json_response(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/todos")
            .header("content-type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap(),
    )
    .await;

    assert!(status.is_client_error());
    assert_eq!(json["status"], status.as_u16());
}

#[tokio::test]
async fn unsupported_method_keeps_status() {
    let app = test_router();

    let (status, json) = json_response(&app, empty_request("PATCH", "/api/todos/1")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["status"], 405);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_router();

    let (status, json) = json_response(&app, empty_request("GET", "/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], "ok");
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let app = test_router();

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move { create_todo(&app, &format!("todo {n}")).await })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let todo = handle.await.expect("task should finish");
        assert!(ids.insert(todo["id"].as_i64().unwrap()));
    }
    assert_eq!(ids.len(), 16);
}
