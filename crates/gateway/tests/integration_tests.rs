//! End-to-end tests for the HTTP adapter against an in-memory store.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rollcall_gateway::{create_router, GatewayState};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    rollcall_database::run_migrations(&pool).await.unwrap();
    create_router(GatewayState::new(pool))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_role_then_duplicate_conflict() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/chats/1/roles",
        Some(json!({"name": "designers"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "designers");
    assert!(body["id"].as_i64().unwrap() > 0);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/chats/1/roles",
        Some(json!({"name": "designers"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("designers"));

    // Same name in another chat is fine.
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/chats/2/roles",
        Some(json!({"name": "designers"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn blank_role_name_is_rejected() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/chats/1/roles",
        Some(json!({"name": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn join_list_notify_leave_flow() {
    let app = test_app().await;
    send(
        &app,
        Method::POST,
        "/api/chats/1/roles",
        Some(json!({"name": "team"})),
    )
    .await;

    for (user_id, username) in [(1, json!("alice")), (2, json!("bob")), (3, Value::Null)] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/chats/1/roles/join",
            Some(json!({"name": "team", "user_id": user_id, "username": username})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, Method::GET, "/api/chats/1/roles/team/members", None).await;
    assert_eq!(status, StatusCode::OK);
    let members: Vec<&str> = body["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(members.len(), 2);
    assert!(members.contains(&"alice") && members.contains(&"bob"));
    assert_eq!(body["hidden"], 1);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/chats/1/notify",
        Some(json!({"text": "team Meeting at 18:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["body"], "Meeting at 18:00");
    assert_eq!(body["mentions"].as_array().unwrap().len(), 2);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/chats/1/roles/leave",
        Some(json!({"name": "team", "user_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/chats/1/users/2/roles", None).await;
    assert_eq!(body["roles"], json!(["team"]));
    let (_, body) = send(&app, Method::GET, "/api/chats/1/users/1/roles", None).await;
    assert_eq!(body["roles"], json!([]));
}

#[tokio::test]
async fn list_roles_is_sorted() {
    let app = test_app().await;
    for name in ["b", "a"] {
        send(
            &app,
            Method::POST,
            "/api/chats/1/roles",
            Some(json!({ "name": name })),
        )
        .await;
    }

    let (status, body) = send(&app, Method::GET, "/api/chats/1/roles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roles"], json!(["a", "b"]));
}

#[tokio::test]
async fn error_statuses_for_missing_roles_and_bodies() {
    let app = test_app().await;
    send(
        &app,
        Method::POST,
        "/api/chats/1/roles",
        Some(json!({"name": "empty"})),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/chats/1/roles/join",
        Some(json!({"name": "ghost", "user_id": 1, "username": "alice"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/chats/1/roles/ghost/members", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/chats/1/notify",
        Some(json!({"text": "ghost hi"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/chats/1/notify",
        Some(json!({"text": "empty"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/chats/1/notify",
        Some(json!({"text": "empty hi"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
