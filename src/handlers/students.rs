//! Student CRUD handlers.

use crate::dto::{parse_new_student, parse_student_patch};
use crate::error::AppError;
use crate::models::Student;
use crate::state::AppState;
use crate::store::StudentStore;
use crate::validate::body_to_map;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(StudentStore::list(&state.pool).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let body = body_to_map(body)?;
    let new = parse_new_student(&body)?;
    let row = StudentStore::create(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    let row = StudentStore::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    Ok(Json(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Student>, AppError> {
    let body = body_to_map(body)?;
    let patch = parse_student_patch(&body)?;
    let row = StudentStore::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    Ok(Json(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !StudentStore::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("student {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    StudentStore::delete_all(&state.pool).await?;
    Ok(StatusCode::NO_CONTENT)
}
