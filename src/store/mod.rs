//! Data access, one repository per entity over an injected pool.
//!
//! Cascade deletes are an explicit policy here, not database configuration:
//! every parent delete removes its children first, inside one transaction,
//! so a failure anywhere leaves no partial state.

mod attendance;
mod courses;
mod students;
mod teachers;
mod users;

pub use attendance::AttendanceStore;
pub use courses::CourseStore;
pub use students::StudentStore;
pub use teachers::TeacherStore;
pub use users::UserStore;

use crate::error::AppError;

/// Map a unique-constraint violation to a validation error on `field`.
pub(crate) fn map_unique(field: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Validation(format!("{} is already in use", field))
        }
        _ => AppError::Db(e),
    }
}

pub(crate) async fn student_exists<'e, E>(ex: E, id: i64) -> Result<bool, AppError>
where
    E: sqlx::SqliteExecutor<'e>,
{
    let n: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM students WHERE id = ?)")
        .bind(id)
        .fetch_one(ex)
        .await?;
    Ok(n != 0)
}

pub(crate) async fn teacher_exists<'e, E>(ex: E, id: i64) -> Result<bool, AppError>
where
    E: sqlx::SqliteExecutor<'e>,
{
    let n: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM teachers WHERE id = ?)")
        .bind(id)
        .fetch_one(ex)
        .await?;
    Ok(n != 0)
}

pub(crate) async fn course_exists<'e, E>(ex: E, id: i64) -> Result<bool, AppError>
where
    E: sqlx::SqliteExecutor<'e>,
{
    let n: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM courses WHERE id = ?)")
        .bind(id)
        .fetch_one(ex)
        .await?;
    Ok(n != 0)
}
