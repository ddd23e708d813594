mod common;

use axum::http::StatusCode;
use common::{app, create_course, create_student, create_teacher, error_code, list_len, send};
use serde_json::json;

async fn seed(app: &axum::Router) -> (i64, i64) {
    let teacher = create_teacher(app, "Turing", "turing@example.edu").await;
    let course = create_course(app, "Computation", teacher).await;
    let student = create_student(app, "Ada", "ada@example.edu").await;
    (student, course)
}

#[tokio::test]
async fn attendance_shape_and_crud() {
    let app = app().await;
    let (student, course) = seed(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/attendance",
        Some(json!({
            "studentId": student,
            "courseId": course,
            "date": "2026-03-02",
            "status": "present"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["studentId"], student);
    assert_eq!(body["courseId"], course);
    assert_eq!(body["date"], "2026-03-02");
    assert_eq!(body["status"], "present");
    assert!(body.get("student_id").is_none());

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/attendance/{}", id),
        Some(json!({"status": "late"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "late");
    assert_eq!(body["date"], "2026-03-02");

    let (status, _) = send(&app, "DELETE", &format!("/attendance/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(list_len(&app, "/attendance").await, 0);
}

#[tokio::test]
async fn invalid_status_and_date_are_rejected() {
    let app = app().await;
    let (student, course) = seed(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/attendance",
        Some(json!({
            "studentId": student,
            "courseId": course,
            "date": "2026-03-02",
            "status": "asleep"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "validation_error");

    let (status, body) = send(
        &app,
        "POST",
        "/attendance",
        Some(json!({
            "studentId": student,
            "courseId": course,
            "date": "02/03/2026",
            "status": "present"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "validation_error");
}

#[tokio::test]
async fn missing_reference_field_is_bad_request() {
    let app = app().await;
    let (_, course) = seed(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/attendance",
        Some(json!({"courseId": course, "date": "2026-03-02", "status": "present"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "bad_request");
}

#[tokio::test]
async fn unknown_reference_fails_validation() {
    let app = app().await;
    let (student, _) = seed(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/attendance",
        Some(json!({
            "studentId": student,
            "courseId": 999,
            "date": "2026-03-02",
            "status": "present"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "validation_error");
    assert_eq!(list_len(&app, "/attendance").await, 0);
}

#[tokio::test]
async fn bulk_create_persists_all_records() {
    let app = app().await;
    let (student, course) = seed(&app).await;

    let records: Vec<_> = (1..=5)
        .map(|day| {
            json!({
                "studentId": student,
                "courseId": course,
                "date": format!("2026-03-{:02}", day),
                "status": "present"
            })
        })
        .collect();
    let (status, body) = send(&app, "POST", "/attendance/bulk", Some(json!(records))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.as_array().unwrap().len(), 5);
    assert_eq!(list_len(&app, "/attendance").await, 5);
}

#[tokio::test]
async fn bulk_create_is_all_or_nothing() {
    let app = app().await;
    let (student, course) = seed(&app).await;

    let mut records: Vec<_> = (1..=4)
        .map(|day| {
            json!({
                "studentId": student,
                "courseId": course,
                "date": format!("2026-03-{:02}", day),
                "status": "present"
            })
        })
        .collect();
    records.push(json!({
        "studentId": student,
        "courseId": course,
        "date": "2026-03-05",
        "status": "vanished"
    }));

    let (status, _) = send(&app, "POST", "/attendance/bulk", Some(json!(records))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(list_len(&app, "/attendance").await, 0);

    // Same for a bad reference in the middle of the batch.
    let mut records: Vec<_> = (1..=2)
        .map(|day| {
            json!({
                "studentId": student,
                "courseId": course,
                "date": format!("2026-04-{:02}", day),
                "status": "absent"
            })
        })
        .collect();
    records.insert(
        1,
        json!({
            "studentId": 999,
            "courseId": course,
            "date": "2026-04-03",
            "status": "absent"
        }),
    );
    let (status, _) = send(&app, "POST", "/attendance/bulk", Some(json!(records))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(list_len(&app, "/attendance").await, 0);
}

#[tokio::test]
async fn delete_all_attendance() {
    let app = app().await;
    let (student, course) = seed(&app).await;
    send(
        &app,
        "POST",
        "/attendance",
        Some(json!({
            "studentId": student,
            "courseId": course,
            "date": "2026-03-02",
            "status": "unmarked"
        })),
    )
    .await;

    let (status, _) = send(&app, "DELETE", "/attendance/all", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(list_len(&app, "/attendance").await, 0);
}
