//! Teacher rows. A teacher owns their courses, so deleting one cascades to
//! those courses and transitively to memberships and attendance records.

use crate::dto::{NewTeacher, TeacherPatch};
use crate::error::AppError;
use crate::models::Teacher;
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, name, email";

pub struct TeacherStore;

impl TeacherStore {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Teacher>, AppError> {
        let rows = sqlx::query_as::<_, Teacher>("SELECT id, name, email FROM teachers ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Teacher>, AppError> {
        let row = sqlx::query_as::<_, Teacher>("SELECT id, name, email FROM teachers WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &SqlitePool, new: &NewTeacher) -> Result<Teacher, AppError> {
        tracing::debug!(email = %new.email, "create teacher");
        sqlx::query_as::<_, Teacher>(&format!(
            "INSERT INTO teachers (name, email) VALUES (?, ?) RETURNING {}",
            COLUMNS
        ))
        .bind(&new.name)
        .bind(&new.email)
        .fetch_one(pool)
        .await
        .map_err(super::map_unique("email"))
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &TeacherPatch,
    ) -> Result<Option<Teacher>, AppError> {
        let Some(current) = Self::get(pool, id).await? else {
            return Ok(None);
        };
        let name = patch.name.clone().unwrap_or(current.name);
        let email = patch.email.clone().unwrap_or(current.email);
        let row = sqlx::query_as::<_, Teacher>(&format!(
            "UPDATE teachers SET name = ?, email = ? WHERE id = ? RETURNING {}",
            COLUMNS
        ))
        .bind(name)
        .bind(email)
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(super::map_unique("email"))?;
        Ok(Some(row))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        cascade_courses_of(&mut tx, id).await?;
        let res = sqlx::query("DELETE FROM teachers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn delete_all(pool: &SqlitePool) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;
        delete_all_in(&mut tx).await?;
        tx.commit().await?;
        Ok(())
    }
}

async fn delete_all_in(tx: &mut SqliteConnection) -> Result<(), AppError> {
    sqlx::query(
        "DELETE FROM attendance_records WHERE course_id IN \
         (SELECT id FROM courses WHERE teacher_id IN (SELECT id FROM teachers))",
    )
    .execute(&mut *tx)
    .await?;
    sqlx::query(
        "DELETE FROM course_students WHERE course_id IN \
         (SELECT id FROM courses WHERE teacher_id IN (SELECT id FROM teachers))",
    )
    .execute(&mut *tx)
    .await?;
    sqlx::query("DELETE FROM courses WHERE teacher_id IN (SELECT id FROM teachers)")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM teachers").execute(&mut *tx).await?;
    Ok(())
}

async fn cascade_courses_of(tx: &mut SqliteConnection, teacher_id: i64) -> Result<(), AppError> {
    sqlx::query(
        "DELETE FROM attendance_records WHERE course_id IN \
         (SELECT id FROM courses WHERE teacher_id = ?)",
    )
    .bind(teacher_id)
    .execute(&mut *tx)
    .await?;
    sqlx::query(
        "DELETE FROM course_students WHERE course_id IN \
         (SELECT id FROM courses WHERE teacher_id = ?)",
    )
    .bind(teacher_id)
    .execute(&mut *tx)
    .await?;
    sqlx::query("DELETE FROM courses WHERE teacher_id = ?")
        .bind(teacher_id)
        .execute(&mut *tx)
        .await?;
    Ok(())
}
