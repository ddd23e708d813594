//! Attendance handlers: CRUD plus all-or-nothing bulk create.

use crate::dto::{parse_attendance_patch, parse_new_attendance, AttendanceDto};
use crate::error::AppError;
use crate::state::AppState;
use crate::store::AttendanceStore;
use crate::validate::{body_to_array, body_to_map};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AttendanceDto>>, AppError> {
    let rows = AttendanceStore::list(&state.pool).await?;
    Ok(Json(rows.into_iter().map(AttendanceDto::from).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<AttendanceDto>), AppError> {
    let body = body_to_map(body)?;
    let new = parse_new_attendance(&body)?;
    let row = AttendanceStore::create(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// Validate every entry before persisting any; one bad entry fails the whole
/// batch with nothing written.
pub async fn bulk_create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Vec<AttendanceDto>>), AppError> {
    let items = body_to_array(body)?;
    let mut parsed = Vec::with_capacity(items.len());
    for item in &items {
        parsed.push(parse_new_attendance(item)?);
    }
    let rows = AttendanceStore::bulk_create(&state.pool, &parsed).await?;
    Ok((
        StatusCode::CREATED,
        Json(rows.into_iter().map(AttendanceDto::from).collect()),
    ))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AttendanceDto>, AppError> {
    let row = AttendanceStore::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("attendance record {}", id)))?;
    Ok(Json(row.into()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<AttendanceDto>, AppError> {
    let body = body_to_map(body)?;
    let patch = parse_attendance_patch(&body)?;
    let row = AttendanceStore::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("attendance record {}", id)))?;
    Ok(Json(row.into()))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !AttendanceStore::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("attendance record {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    AttendanceStore::delete_all(&state.pool).await?;
    Ok(StatusCode::NO_CONTENT)
}
