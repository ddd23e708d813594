//! Shared test harness: in-memory database behind the real router.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use campus_api::{api_routes, apply_schema, common_routes_with_ready, connect_in_memory, AppState};

pub async fn app() -> Router {
    let pool = connect_in_memory().await.expect("open in-memory db");
    apply_schema(&pool).await.expect("apply schema");
    let state = AppState { pool };
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(api_routes(state))
}

/// Drive one request through the router; returns status and parsed body
/// (Null for empty bodies such as 204 responses).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };
    let res = app.clone().oneshot(req).await.expect("send request");
    let status = res.status();
    let bytes = res.into_body().collect().await.expect("read body").to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse body")
    };
    (status, body)
}

pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or("")
}

pub async fn create_student(app: &Router, name: &str, email: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/students",
        Some(json!({"name": name, "dept": "CS", "email": email})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("student id")
}

pub async fn create_teacher(app: &Router, name: &str, email: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/teachers",
        Some(json!({"name": name, "email": email})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("teacher id")
}

pub async fn create_course(app: &Router, name: &str, teacher_id: i64) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/courses",
        Some(json!({"name": name, "teacherId": teacher_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("course id")
}

pub async fn list_len(app: &Router, uri: &str) -> usize {
    let (status, body) = send(app, "GET", uri, None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().expect("array body").len()
}
