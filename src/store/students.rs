//! Student rows. Deleting a student also removes their course memberships
//! and attendance records.

use crate::dto::{NewStudent, StudentPatch};
use crate::error::AppError;
use crate::models::Student;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, dept, email";

pub struct StudentStore;

impl StudentStore {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, Student>(
            "SELECT id, name, dept, email FROM students ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, Student>(
            "SELECT id, name, dept, email FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn create(pool: &SqlitePool, new: &NewStudent) -> Result<Student, AppError> {
        tracing::debug!(email = %new.email, "create student");
        sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (name, dept, email) VALUES (?, ?, ?) RETURNING {}",
            COLUMNS
        ))
        .bind(&new.name)
        .bind(&new.dept)
        .bind(&new.email)
        .fetch_one(pool)
        .await
        .map_err(super::map_unique("email"))
    }

    /// Partial update: absent fields keep their current values.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &StudentPatch,
    ) -> Result<Option<Student>, AppError> {
        let Some(current) = Self::get(pool, id).await? else {
            return Ok(None);
        };
        let name = patch.name.clone().unwrap_or(current.name);
        let dept = patch.dept.clone().unwrap_or(current.dept);
        let email = patch.email.clone().unwrap_or(current.email);
        let row = sqlx::query_as::<_, Student>(&format!(
            "UPDATE students SET name = ?, dept = ?, email = ? WHERE id = ? RETURNING {}",
            COLUMNS
        ))
        .bind(name)
        .bind(dept)
        .bind(email)
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(super::map_unique("email"))?;
        Ok(Some(row))
    }

    /// Returns false when no such student existed.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM attendance_records WHERE student_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM course_students WHERE student_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let res = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn delete_all(pool: &SqlitePool) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM attendance_records WHERE student_id IN (SELECT id FROM students)")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM course_students")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM students").execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }
}
