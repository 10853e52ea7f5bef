//! Register and login over HTTP.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use cantinho_api::config::ServerConfig;
use cantinho_db::test_fixtures::failing_database;

use common::{json_request, router_for, send, test_app};

#[tokio::test]
async fn test_register_then_login_scenario() {
    let (app, _store) = test_app("acc");

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/register",
            json!({"code": "9wq1", "question_id": "q1", "answer": "Paris"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Account created successfully!", "user_id": "9wq1"})
    );

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/login",
            json!({"code": "9wq1", "question_id": "q1", "answer": "paris"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Login successful", "user_id": "9wq1"}));

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/login",
            json!({"code": "9wq1", "question_id": "q1", "answer": "Rome"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["detail"].as_str().unwrap().contains("Invalid credentials"));

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/login",
            json!({"code": "9wq1", "question_id": "q2", "answer": "Paris"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_duplicate_code_is_bad_request() {
    let (app, store) = test_app("acc");
    let first = json!({"code": "9wq1", "question_id": "q1", "answer": "Paris"});
    let (status, _) = send(&app, json_request(Method::POST, "/register", first)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/register",
            json!({"code": "9wq1", "question_id": "q2", "answer": "Rome"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("already in use"));
    assert_eq!(store.len("users").await, 1);
}

#[tokio::test]
async fn test_login_unknown_code_is_not_found() {
    let (app, _store) = test_app("acc");

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/login",
            json!({"code": "0000", "question_id": "q1", "answer": "x"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().starts_with("User not found"));
}

#[tokio::test]
async fn test_register_missing_field_is_unprocessable() {
    let (app, store) = test_app("acc");

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/register", json!({"code": "9wq1", "answer": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("question_id"));
    assert!(store.is_empty("users").await);
}

#[tokio::test]
async fn test_register_blank_code_is_unprocessable() {
    let (app, store) = test_app("acc");

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/register",
            json!({"code": "", "question_id": "q1", "answer": "x"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    assert!(store.is_empty("users").await);
}

#[tokio::test]
async fn test_register_store_failure_is_500_not_duplicate() {
    let app = router_for(failing_database("boom"), &ServerConfig::default());

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/register",
            json!({"code": "9wq1", "question_id": "q1", "answer": "Paris"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Write failed: boom"}));
}

#[tokio::test]
async fn test_login_store_failure_is_500_not_not_found() {
    let app = router_for(failing_database("boom"), &ServerConfig::default());

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/login",
            json!({"code": "9wq1", "question_id": "q1", "answer": "Paris"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Query failed: boom"}));
}
