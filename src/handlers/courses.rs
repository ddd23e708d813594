//! Course handlers: CRUD plus enrollment.
//!
//! Create resolves `teacherId` to an existing teacher before any write: a
//! missing field is a bad request, an unknown teacher is 404 and no course
//! row is created.

use crate::dto::{parse_course_patch, parse_new_course, CourseDto};
use crate::error::AppError;
use crate::state::AppState;
use crate::store::{CourseStore, StudentStore, TeacherStore};
use crate::validate::{body_to_map, require_id};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CourseDto>>, AppError> {
    let courses = CourseStore::list(&state.pool).await?;
    let mut by_course: HashMap<i64, Vec<i64>> = HashMap::new();
    for (course_id, student_id) in CourseStore::memberships(&state.pool).await? {
        by_course.entry(course_id).or_default().push(student_id);
    }
    let out = courses
        .into_iter()
        .map(|c| {
            let students = by_course.remove(&c.id).unwrap_or_default();
            CourseDto::from_parts(c, students)
        })
        .collect();
    Ok(Json(out))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<CourseDto>), AppError> {
    let body = body_to_map(body)?;
    let new = parse_new_course(&body)?;
    if TeacherStore::get(&state.pool, new.teacher_id).await?.is_none() {
        return Err(AppError::NotFound(format!("teacher {}", new.teacher_id)));
    }
    for sid in &new.students {
        if StudentStore::get(&state.pool, *sid).await?.is_none() {
            return Err(AppError::Validation(format!("student {} does not exist", sid)));
        }
    }
    let (course, students) = CourseStore::create(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(CourseDto::from_parts(course, students))))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CourseDto>, AppError> {
    let course = CourseStore::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {}", id)))?;
    let students = CourseStore::student_ids(&state.pool, id).await?;
    Ok(Json(CourseDto::from_parts(course, students)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<CourseDto>, AppError> {
    let body = body_to_map(body)?;
    let patch = parse_course_patch(&body)?;
    if let Some(teacher_id) = patch.teacher_id {
        if TeacherStore::get(&state.pool, teacher_id).await?.is_none() {
            return Err(AppError::NotFound(format!("teacher {}", teacher_id)));
        }
    }
    let course = CourseStore::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {}", id)))?;
    let students = CourseStore::student_ids(&state.pool, id).await?;
    Ok(Json(CourseDto::from_parts(course, students)))
}

/// Add `studentId` from the body to the course membership set and return the
/// updated course representation.
pub async fn enroll(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<CourseDto>, AppError> {
    let course = CourseStore::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {}", id)))?;
    let body = body_to_map(body)?;
    let student_id = require_id(&body, "studentId")?;
    if StudentStore::get(&state.pool, student_id).await?.is_none() {
        return Err(AppError::NotFound(format!("student {}", student_id)));
    }
    CourseStore::enroll(&state.pool, id, student_id).await?;
    let students = CourseStore::student_ids(&state.pool, id).await?;
    Ok(Json(CourseDto::from_parts(course, students)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !CourseStore::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("course {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    CourseStore::delete_all(&state.pool).await?;
    Ok(StatusCode::NO_CONTENT)
}
