use serde::Serialize;

/// Student row. The API shape matches the columns one-to-one, so rows
/// serialize directly without a separate DTO.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub dept: String,
    pub email: String,
}
