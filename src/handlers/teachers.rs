//! Teacher CRUD handlers.

use crate::dto::{parse_new_teacher, parse_teacher_patch};
use crate::error::AppError;
use crate::models::Teacher;
use crate::state::AppState;
use crate::store::TeacherStore;
use crate::validate::body_to_map;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Teacher>>, AppError> {
    Ok(Json(TeacherStore::list(&state.pool).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let body = body_to_map(body)?;
    let new = parse_new_teacher(&body)?;
    let row = TeacherStore::create(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Teacher>, AppError> {
    let row = TeacherStore::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("teacher {}", id)))?;
    Ok(Json(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Teacher>, AppError> {
    let body = body_to_map(body)?;
    let patch = parse_teacher_patch(&body)?;
    let row = TeacherStore::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("teacher {}", id)))?;
    Ok(Json(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !TeacherStore::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("teacher {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    TeacherStore::delete_all(&state.pool).await?;
    Ok(StatusCode::NO_CONTENT)
}
