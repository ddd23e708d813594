//! Explicit DTO <-> entity mapping.
//!
//! Request payloads are parsed out of raw JSON maps into typed `New*`/`*Patch`
//! structs; responses that rename foreign keys (`teacher_id` -> `teacherId`)
//! go through dedicated response structs instead of serializing rows directly.

use crate::error::AppError;
use crate::models::{AttendanceRecord, AttendanceStatus, Course};
use crate::validate::{
    check_email, opt_id, opt_id_array, opt_str, parse_date, parse_status, require_id, require_str,
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

// ---- students ----

pub struct NewStudent {
    pub name: String,
    pub dept: String,
    pub email: String,
}

#[derive(Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub dept: Option<String>,
    pub email: Option<String>,
}

pub fn parse_new_student(body: &Map<String, Value>) -> Result<NewStudent, AppError> {
    let name = require_str(body, "name")?;
    let dept = require_str(body, "dept")?;
    let email = require_str(body, "email")?;
    check_email(&email)?;
    Ok(NewStudent { name, dept, email })
}

pub fn parse_student_patch(body: &Map<String, Value>) -> Result<StudentPatch, AppError> {
    let email = opt_str(body, "email")?;
    if let Some(ref e) = email {
        check_email(e)?;
    }
    Ok(StudentPatch {
        name: opt_str(body, "name")?,
        dept: opt_str(body, "dept")?,
        email,
    })
}

// ---- teachers ----

pub struct NewTeacher {
    pub name: String,
    pub email: String,
}

#[derive(Default)]
pub struct TeacherPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

pub fn parse_new_teacher(body: &Map<String, Value>) -> Result<NewTeacher, AppError> {
    let name = require_str(body, "name")?;
    let email = require_str(body, "email")?;
    check_email(&email)?;
    Ok(NewTeacher { name, email })
}

pub fn parse_teacher_patch(body: &Map<String, Value>) -> Result<TeacherPatch, AppError> {
    let email = opt_str(body, "email")?;
    if let Some(ref e) = email {
        check_email(e)?;
    }
    Ok(TeacherPatch {
        name: opt_str(body, "name")?,
        email,
    })
}

// ---- courses ----

pub struct NewCourse {
    pub name: String,
    pub teacher_id: i64,
    /// Optional initial membership list; every id must reference a student.
    pub students: Vec<i64>,
}

#[derive(Default)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub teacher_id: Option<i64>,
}

pub fn parse_new_course(body: &Map<String, Value>) -> Result<NewCourse, AppError> {
    let name = require_str(body, "name")?;
    let teacher_id = require_id(body, "teacherId")?;
    let students = opt_id_array(body, "students")?.unwrap_or_default();
    Ok(NewCourse {
        name,
        teacher_id,
        students,
    })
}

pub fn parse_course_patch(body: &Map<String, Value>) -> Result<CoursePatch, AppError> {
    Ok(CoursePatch {
        name: opt_str(body, "name")?,
        teacher_id: opt_id(body, "teacherId")?,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i64,
    pub name: String,
    pub teacher_id: i64,
    pub students: Vec<i64>,
}

impl CourseDto {
    pub fn from_parts(course: Course, students: Vec<i64>) -> Self {
        Self {
            id: course.id,
            name: course.name,
            teacher_id: course.teacher_id,
            students,
        }
    }
}

// ---- attendance ----

pub struct NewAttendance {
    pub student_id: i64,
    pub course_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Default)]
pub struct AttendancePatch {
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
}

pub fn parse_new_attendance(body: &Map<String, Value>) -> Result<NewAttendance, AppError> {
    let student_id = require_id(body, "studentId")?;
    let course_id = require_id(body, "courseId")?;
    let date = parse_date(&require_str(body, "date")?)?;
    let status = parse_status(&require_str(body, "status")?)?;
    Ok(NewAttendance {
        student_id,
        course_id,
        date,
        status,
    })
}

pub fn parse_attendance_patch(body: &Map<String, Value>) -> Result<AttendancePatch, AppError> {
    Ok(AttendancePatch {
        student_id: opt_id(body, "studentId")?,
        course_id: opt_id(body, "courseId")?,
        date: opt_str(body, "date")?.as_deref().map(parse_date).transpose()?,
        status: opt_str(body, "status")?
            .as_deref()
            .map(parse_status)
            .transpose()?,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl From<AttendanceRecord> for AttendanceDto {
    fn from(r: AttendanceRecord) -> Self {
        Self {
            id: r.id,
            student_id: r.student_id,
            course_id: r.course_id,
            date: r.date,
            status: r.status,
        }
    }
}
