//! Resource routes. Static segments (`/all`, `/bulk`) are registered beside
//! the `/:id` routes; the router prefers the static match.

use crate::handlers::{attendance, courses, students, teachers, users};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(students::list).post(students::create))
        .route("/students/all", delete(students::delete_all))
        .route(
            "/students/:id",
            get(students::read)
                .put(students::update)
                .patch(students::update)
                .delete(students::delete),
        )
        .route("/teachers", get(teachers::list).post(teachers::create))
        .route("/teachers/all", delete(teachers::delete_all))
        .route(
            "/teachers/:id",
            get(teachers::read)
                .put(teachers::update)
                .patch(teachers::update)
                .delete(teachers::delete),
        )
        .route("/courses", get(courses::list).post(courses::create))
        .route("/courses/all", delete(courses::delete_all))
        .route(
            "/courses/:id",
            get(courses::read)
                .put(courses::update)
                .patch(courses::update)
                .delete(courses::delete),
        )
        .route("/courses/:id/enroll", post(courses::enroll))
        .route("/attendance", get(attendance::list).post(attendance::create))
        .route("/attendance/all", delete(attendance::delete_all))
        .route("/attendance/bulk", post(attendance::bulk_create))
        .route(
            "/attendance/:id",
            get(attendance::read)
                .put(attendance::update)
                .patch(attendance::update)
                .delete(attendance::delete),
        )
        .route("/users/all", delete(users::delete_all))
        .with_state(state)
}
