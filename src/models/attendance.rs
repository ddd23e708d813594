use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status. Stored as lowercase TEXT; never transitioned by the
/// system, only written and read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Unmarked,
}

impl AttendanceStatus {
    pub const ALL: [&'static str; 4] = ["present", "absent", "late", "unmarked"];
}

/// Attendance row; API shape is [`crate::dto::AttendanceDto`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}
