//! Aggregate over students and teachers: wipe both populations and all of
//! their dependents in one transaction.

use crate::error::AppError;
use sqlx::SqlitePool;

pub struct UserStore;

impl UserStore {
    pub async fn delete_all(pool: &SqlitePool) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;
        // Every course belongs to a teacher, so removing all teachers
        // leaves no course behind; delete child tables outright.
        sqlx::query("DELETE FROM attendance_records")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM course_students")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM courses").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM students").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM teachers").execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }
}
