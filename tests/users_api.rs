mod common;

use axum::http::StatusCode;
use common::{app, create_course, create_student, create_teacher, list_len, send};
use serde_json::json;

#[tokio::test]
async fn delete_all_users_purges_students_teachers_and_dependents() {
    let app = app().await;
    let s1 = create_student(&app, "Ada", "ada@example.edu").await;
    create_student(&app, "Grace", "grace@example.edu").await;
    create_student(&app, "Edsger", "edsger@example.edu").await;
    let t1 = create_teacher(&app, "Turing", "turing@example.edu").await;
    create_teacher(&app, "Hopper", "hopper@example.edu").await;
    let course = create_course(&app, "Computation", t1).await;
    send(
        &app,
        "POST",
        &format!("/courses/{}/enroll", course),
        Some(json!({"studentId": s1})),
    )
    .await;
    send(
        &app,
        "POST",
        "/attendance",
        Some(json!({
            "studentId": s1,
            "courseId": course,
            "date": "2026-03-02",
            "status": "present"
        })),
    )
    .await;

    let (status, _) = send(&app, "DELETE", "/users/all", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert_eq!(list_len(&app, "/students").await, 0);
    assert_eq!(list_len(&app, "/teachers").await, 0);
    assert_eq!(list_len(&app, "/courses").await, 0);
    assert_eq!(list_len(&app, "/attendance").await, 0);
}

#[tokio::test]
async fn health_and_ready_endpoints() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let (status, body) = send(&app, "GET", "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "campus-api");
}
