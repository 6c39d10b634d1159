#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use student_management::api::routes::student_routes;
use student_management::application::services::StudentService;
use student_management::domain::entities::NewStudent;
use student_management::infrastructure::persistence::PgStudentRepository;
use student_management::state::AppState;

pub async fn create_test_student(pool: &PgPool, first: &str, last: &str, email: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO students (first_name, last_name, email, course) VALUES ($1, $2, $3, 'CS') RETURNING id",
    )
    .bind(first)
    .bind(last)
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_inactive_student(pool: &PgPool, first: &str, last: &str, email: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO students (first_name, last_name, email, is_active) VALUES ($1, $2, $3, FALSE) RETURNING id",
    )
    .bind(first)
    .bind(last)
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_students(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn new_student(first: &str, last: &str, email: &str) -> NewStudent {
    NewStudent {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone_number: None,
        date_of_birth: None,
        address: None,
        course: Some("CS".to_string()),
        is_active: true,
    }
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgStudentRepository::new(Arc::new(pool)));
    AppState::new(Arc::new(StudentService::new(repository)))
}

/// Student routes mounted under `/api`, as in the default configuration.
pub fn make_server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .nest("/api", student_routes())
        .with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}
