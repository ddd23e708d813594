//! Request field extraction and value checks.
//!
//! Missing reference fields (`teacherId`, `studentId`, `courseId`) surface as
//! `BadRequest`; everything else (missing scalar fields, malformed values)
//! surfaces as `Validation`. Both map to HTTP 400 with distinct codes.

use crate::error::AppError;
use crate::models::AttendanceStatus;
use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Require the request body to be a JSON object.
pub fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

/// Require the request body to be a JSON array of objects.
pub fn body_to_array(value: Value) -> Result<Vec<Map<String, Value>>, AppError> {
    match value {
        Value::Array(items) => items.into_iter().map(body_to_map).collect(),
        _ => Err(AppError::BadRequest("body must be a JSON array".into())),
    }
}

pub fn require_str(body: &Map<String, Value>, key: &str) -> Result<String, AppError> {
    match body.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Null) | None => Err(AppError::Validation(format!("{} is required", key))),
        _ => Err(AppError::Validation(format!("{} must be a string", key))),
    }
}

pub fn opt_str(body: &Map<String, Value>, key: &str) -> Result<Option<String>, AppError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        _ => Err(AppError::Validation(format!("{} must be a string", key))),
    }
}

/// Required reference field: absent means a bad request, not a validation error.
pub fn require_id(body: &Map<String, Value>, key: &str) -> Result<i64, AppError> {
    match body.get(key) {
        Some(Value::Null) | None => Err(AppError::BadRequest(format!("{} not provided", key))),
        Some(v) => v
            .as_i64()
            .ok_or_else(|| AppError::BadRequest(format!("{} must be an integer id", key))),
    }
}

pub fn opt_id(body: &Map<String, Value>, key: &str) -> Result<Option<i64>, AppError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_i64()
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("{} must be an integer id", key))),
    }
}

/// Optional array of integer ids (the writable `students` list on courses).
pub fn opt_id_array(body: &Map<String, Value>, key: &str) -> Result<Option<Vec<i64>>, AppError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for v in items {
                let id = v.as_i64().ok_or_else(|| {
                    AppError::Validation(format!("{} must contain integer ids", key))
                })?;
                out.push(id);
            }
            Ok(Some(out))
        }
        _ => Err(AppError::Validation(format!("{} must be an array", key))),
    }
}

/// Minimal shape check: non-empty local part and domain around a single '@'.
pub fn check_email(email: &str) -> Result<(), AppError> {
    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || parts.next().is_some() || email.contains(' ') {
        return Err(AppError::Validation("email must be a valid email address".into()));
    }
    Ok(())
}

pub fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("date must be formatted YYYY-MM-DD".into()))
}

pub fn parse_status(s: &str) -> Result<AttendanceStatus, AppError> {
    match s {
        "present" => Ok(AttendanceStatus::Present),
        "absent" => Ok(AttendanceStatus::Absent),
        "late" => Ok(AttendanceStatus::Late),
        "unmarked" => Ok(AttendanceStatus::Unmarked),
        _ => Err(AppError::Validation(format!(
            "status must be one of: {}",
            AttendanceStatus::ALL.join(", ")
        ))),
    }
}
