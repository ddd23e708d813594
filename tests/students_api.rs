mod common;

use axum::http::StatusCode;
use common::{app, create_student, error_code, list_len, send};
use serde_json::json;

#[tokio::test]
async fn student_crud_roundtrip() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/students",
        Some(json!({"name": "Ada", "dept": "CS", "email": "ada@example.edu"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["dept"], "CS");
    assert_eq!(body["email"], "ada@example.edu");

    let (status, body) = send(&app, "GET", &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ada");

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/students/{}", id),
        Some(json!({"dept": "Math"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dept"], "Math");
    assert_eq!(body["name"], "Ada");

    assert_eq!(list_len(&app, "/students").await, 1);

    let (status, _) = send(&app, "DELETE", &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(list_len(&app, "/students").await, 0);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = app().await;
    create_student(&app, "Ada", "ada@example.edu").await;

    let (status, body) = send(
        &app,
        "POST",
        "/students",
        Some(json!({"name": "Imposter", "dept": "CS", "email": "ada@example.edu"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "validation_error");
    assert_eq!(list_len(&app, "/students").await, 1);
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/students",
        Some(json!({"name": "Ada", "dept": "CS", "email": "not-an-email"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "validation_error");
}

#[tokio::test]
async fn missing_required_field_is_rejected() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/students",
        Some(json!({"name": "Ada", "email": "ada@example.edu"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "validation_error");
}

#[tokio::test]
async fn update_to_taken_email_is_rejected() {
    let app = app().await;
    create_student(&app, "Ada", "ada@example.edu").await;
    let second = create_student(&app, "Grace", "grace@example.edu").await;

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/students/{}", second),
        Some(json!({"email": "ada@example.edu"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "validation_error");
}

#[tokio::test]
async fn missing_student_is_404() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/students/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "not_found");

    let (status, _) = send(&app, "DELETE", "/students/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_all_students_empties_the_table() {
    let app = app().await;
    create_student(&app, "Ada", "ada@example.edu").await;
    create_student(&app, "Grace", "grace@example.edu").await;

    let (status, _) = send(&app, "DELETE", "/students/all", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(list_len(&app, "/students").await, 0);
}
