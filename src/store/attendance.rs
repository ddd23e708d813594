//! Attendance rows. Referenced student/course ids are verified inside the
//! same transaction as the insert; bulk create is all-or-nothing.

use crate::dto::{AttendancePatch, NewAttendance};
use crate::error::AppError;
use crate::models::AttendanceRecord;
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, student_id, course_id, date, status";

pub struct AttendanceStore;

impl AttendanceStore {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<AttendanceRecord>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceRecord>(
            "SELECT id, student_id, course_id, date, status FROM attendance_records ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<AttendanceRecord>, AppError> {
        let row = sqlx::query_as::<_, AttendanceRecord>(
            "SELECT id, student_id, course_id, date, status FROM attendance_records WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn create(pool: &SqlitePool, new: &NewAttendance) -> Result<AttendanceRecord, AppError> {
        let mut tx = pool.begin().await?;
        let row = insert_one(&mut tx, new).await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Insert every record or none: the first invalid reference rolls the
    /// whole batch back.
    pub async fn bulk_create(
        pool: &SqlitePool,
        items: &[NewAttendance],
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        tracing::debug!(count = items.len(), "bulk create attendance");
        let mut out = Vec::with_capacity(items.len());
        let mut tx = pool.begin().await?;
        for item in items {
            out.push(insert_one(&mut tx, item).await?);
        }
        tx.commit().await?;
        Ok(out)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &AttendancePatch,
    ) -> Result<Option<AttendanceRecord>, AppError> {
        let Some(current) = Self::get(pool, id).await? else {
            return Ok(None);
        };
        let student_id = patch.student_id.unwrap_or(current.student_id);
        let course_id = patch.course_id.unwrap_or(current.course_id);
        let date = patch.date.unwrap_or(current.date);
        let status = patch.status.unwrap_or(current.status);

        let mut tx = pool.begin().await?;
        check_refs(&mut tx, student_id, course_id).await?;
        let row = sqlx::query_as::<_, AttendanceRecord>(&format!(
            "UPDATE attendance_records SET student_id = ?, course_id = ?, date = ?, status = ? \
             WHERE id = ? RETURNING {}",
            COLUMNS
        ))
        .bind(student_id)
        .bind(course_id)
        .bind(date)
        .bind(status)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let res = sqlx::query("DELETE FROM attendance_records WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn delete_all(pool: &SqlitePool) -> Result<(), AppError> {
        sqlx::query("DELETE FROM attendance_records").execute(pool).await?;
        Ok(())
    }
}

async fn check_refs(
    tx: &mut SqliteConnection,
    student_id: i64,
    course_id: i64,
) -> Result<(), AppError> {
    if !super::student_exists(&mut *tx, student_id).await? {
        return Err(AppError::Validation(format!(
            "student {} does not exist",
            student_id
        )));
    }
    if !super::course_exists(&mut *tx, course_id).await? {
        return Err(AppError::Validation(format!(
            "course {} does not exist",
            course_id
        )));
    }
    Ok(())
}

async fn insert_one(
    tx: &mut SqliteConnection,
    new: &NewAttendance,
) -> Result<AttendanceRecord, AppError> {
    check_refs(&mut *tx, new.student_id, new.course_id).await?;
    let row = sqlx::query_as::<_, AttendanceRecord>(&format!(
        "INSERT INTO attendance_records (student_id, course_id, date, status) \
         VALUES (?, ?, ?, ?) RETURNING {}",
        COLUMNS
    ))
    .bind(new.student_id)
    .bind(new.course_id)
    .bind(new.date)
    .bind(new.status)
    .fetch_one(&mut *tx)
    .await?;
    Ok(row)
}
