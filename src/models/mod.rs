//! Entity row types, one module per table.

pub mod attendance;
pub mod course;
pub mod student;
pub mod teacher;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use course::Course;
pub use student::Student;
pub use teacher::Teacher;
