//! API route configuration.

use crate::api::handlers::{
    activate_student_handler, active_students_handler, create_student_handler,
    deactivate_student_handler, delete_student_handler, get_student_by_email_handler,
    get_student_handler, inactive_students_handler, list_students_handler,
    search_students_handler, student_stats_handler, students_by_course_handler,
    update_student_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};

/// Student resource routes, relative to the API base path.
///
/// # Endpoints
///
/// - `GET    /students`                  - List all students
/// - `POST   /students`                  - Create a student
/// - `GET    /students/{id}`             - Get a student by id
/// - `PUT    /students/{id}`             - Replace a student
/// - `DELETE /students/{id}`             - Permanently delete a student
/// - `PATCH  /students/{id}/deactivate`  - Clear the active flag
/// - `PATCH  /students/{id}/activate`    - Set the active flag
/// - `GET    /students/email/{email}`    - Get a student by email
/// - `GET    /students/active`           - List active students
/// - `GET    /students/inactive`         - List inactive students
/// - `GET    /students/course/{course}`  - List students of a course
/// - `GET    /students/search?name=`     - Search by first or last name
/// - `GET    /students/stats`            - Total/active/inactive counts
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students",
            get(list_students_handler).post(create_student_handler),
        )
        .route("/students/active", get(active_students_handler))
        .route("/students/inactive", get(inactive_students_handler))
        .route("/students/search", get(search_students_handler))
        .route("/students/stats", get(student_stats_handler))
        .route("/students/email/{email}", get(get_student_by_email_handler))
        .route("/students/course/{course}", get(students_by_course_handler))
        .route(
            "/students/{id}",
            get(get_student_handler)
                .put(update_student_handler)
                .delete(delete_student_handler),
        )
        .route("/students/{id}/deactivate", patch(deactivate_student_handler))
        .route("/students/{id}/activate", patch(activate_student_handler))
}
