use serde::Serialize;

/// Teacher row; serializes directly, same as [`crate::models::Student`].
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub email: String,
}
