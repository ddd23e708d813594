//! HTTP handlers, one module per resource.

pub mod attendance;
pub mod courses;
pub mod students;
pub mod teachers;
pub mod users;
