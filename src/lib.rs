//! Campus API: student/teacher/course/attendance REST backend.

pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod validate;

pub use config::Config;
pub use db::{apply_schema, connect, connect_in_memory};
pub use error::AppError;
pub use routes::{api_routes, common_routes_with_ready};
pub use state::AppState;
