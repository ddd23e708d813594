//! Course rows plus the course_students membership table.

use crate::dto::{CoursePatch, NewCourse};
use crate::error::AppError;
use crate::models::Course;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, teacher_id";

pub struct CourseStore;

impl CourseStore {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Course>, AppError> {
        let rows =
            sqlx::query_as::<_, Course>("SELECT id, name, teacher_id FROM courses ORDER BY id")
                .fetch_all(pool)
                .await?;
        Ok(rows)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Course>, AppError> {
        let row =
            sqlx::query_as::<_, Course>("SELECT id, name, teacher_id FROM courses WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(row)
    }

    /// Enrolled student ids for one course, ascending.
    pub async fn student_ids(pool: &SqlitePool, course_id: i64) -> Result<Vec<i64>, AppError> {
        let ids = sqlx::query_scalar(
            "SELECT student_id FROM course_students WHERE course_id = ? ORDER BY student_id",
        )
        .bind(course_id)
        .fetch_all(pool)
        .await?;
        Ok(ids)
    }

    /// All (course_id, student_id) pairs; used to assemble the list response
    /// without a query per course.
    pub async fn memberships(pool: &SqlitePool) -> Result<Vec<(i64, i64)>, AppError> {
        let rows = sqlx::query_as(
            "SELECT course_id, student_id FROM course_students ORDER BY course_id, student_id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Insert the course and its initial memberships in one transaction.
    /// Caller has already verified the teacher and student ids exist.
    pub async fn create(
        pool: &SqlitePool,
        new: &NewCourse,
    ) -> Result<(Course, Vec<i64>), AppError> {
        tracing::debug!(name = %new.name, teacher_id = new.teacher_id, "create course");
        let mut tx = pool.begin().await?;
        let course = sqlx::query_as::<_, Course>(&format!(
            "INSERT INTO courses (name, teacher_id) VALUES (?, ?) RETURNING {}",
            COLUMNS
        ))
        .bind(&new.name)
        .bind(new.teacher_id)
        .fetch_one(&mut *tx)
        .await?;
        for sid in &new.students {
            sqlx::query(
                "INSERT OR IGNORE INTO course_students (course_id, student_id) VALUES (?, ?)",
            )
            .bind(course.id)
            .bind(*sid)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        let mut students = new.students.clone();
        students.sort_unstable();
        students.dedup();
        Ok((course, students))
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &CoursePatch,
    ) -> Result<Option<Course>, AppError> {
        let Some(current) = Self::get(pool, id).await? else {
            return Ok(None);
        };
        let name = patch.name.clone().unwrap_or(current.name);
        let teacher_id = patch.teacher_id.unwrap_or(current.teacher_id);
        let row = sqlx::query_as::<_, Course>(&format!(
            "UPDATE courses SET name = ?, teacher_id = ? WHERE id = ? RETURNING {}",
            COLUMNS
        ))
        .bind(name)
        .bind(teacher_id)
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(Some(row))
    }

    /// Idempotent: re-enrolling an already-enrolled student is a no-op.
    pub async fn enroll(pool: &SqlitePool, course_id: i64, student_id: i64) -> Result<(), AppError> {
        sqlx::query("INSERT OR IGNORE INTO course_students (course_id, student_id) VALUES (?, ?)")
            .bind(course_id)
            .bind(student_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM attendance_records WHERE course_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM course_students WHERE course_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let res = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn delete_all(pool: &SqlitePool) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM attendance_records WHERE course_id IN (SELECT id FROM courses)")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM course_students")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM courses").execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }
}
