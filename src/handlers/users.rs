//! User aggregate: a single delete-all over students and teachers together.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::UserStore;
use axum::{extract::State, http::StatusCode};

pub async fn delete_all(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    UserStore::delete_all(&state.pool).await?;
    Ok(StatusCode::NO_CONTENT)
}
