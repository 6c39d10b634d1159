//! Handlers for the student endpoints.
//!
//! Every handler maps path/query/body input to one [`StudentService`] call and
//! renders the result; errors propagate as [`AppError`].
//!
//! [`StudentService`]: crate::application::services::StudentService

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::student::{
    DeleteResponse, SearchQuery, StatsResponse, StudentRequest, StudentResponse,
};
use crate::api::extract::{Path, Query, ValidatedJson};
use crate::domain::entities::Student;
use crate::error::AppError;
use crate::state::AppState;

fn to_list(students: Vec<Student>) -> Json<Vec<StudentResponse>> {
    Json(students.into_iter().map(StudentResponse::from).collect())
}

/// Lists all students.
///
/// # Endpoint
///
/// `GET /api/students`
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = state.student_service.list_students().await?;
    Ok(to_list(students))
}

/// Returns a single student.
///
/// # Endpoint
///
/// `GET /api/students/{id}`
///
/// # Errors
///
/// Returns 404 if the student does not exist.
pub async fn get_student_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = state.student_service.get_student(id).await?;
    Ok(Json(student.into()))
}

/// Returns the student registered under an email.
///
/// # Endpoint
///
/// `GET /api/students/email/{email}`
///
/// # Errors
///
/// Returns 404 if no student uses the email.
pub async fn get_student_by_email_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = state.student_service.get_student_by_email(&email).await?;
    Ok(Json(student.into()))
}

/// `GET /api/students/active`
pub async fn active_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = state.student_service.active_students().await?;
    Ok(to_list(students))
}

/// `GET /api/students/inactive`
pub async fn inactive_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = state.student_service.inactive_students().await?;
    Ok(to_list(students))
}

/// Lists students of one course (exact match).
///
/// # Endpoint
///
/// `GET /api/students/course/{course}`
pub async fn students_by_course_handler(
    Path(course): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = state.student_service.students_by_course(&course).await?;
    Ok(to_list(students))
}

/// Case-insensitive substring search on first or last name.
///
/// # Endpoint
///
/// `GET /api/students/search?name=an`
pub async fn search_students_handler(
    Query(query): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = state.student_service.search_students(&query.name).await?;
    Ok(to_list(students))
}

/// Creates a student.
///
/// # Endpoint
///
/// `POST /api/students`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Jane",
///   "lastName": "Doe",
///   "email": "jane@x.com",
///   "course": "CS"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the payload is invalid or the email already exists.
pub async fn create_student_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    let student = state
        .student_service
        .create_student(payload.into_new_student())
        .await?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Replaces every mutable field of a student.
///
/// # Endpoint
///
/// `PUT /api/students/{id}`
///
/// # Errors
///
/// Returns 400 if the payload is invalid or the new email belongs to another student.
/// Returns 404 if the student does not exist.
pub async fn update_student_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StudentRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = state
        .student_service
        .update_student(id, payload.into_update())
        .await?;

    Ok(Json(student.into()))
}

/// Soft-deletes a student by clearing its active flag.
///
/// # Endpoint
///
/// `PATCH /api/students/{id}/deactivate`
pub async fn deactivate_student_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = state.student_service.deactivate_student(id).await?;
    Ok(Json(student.into()))
}

/// `PATCH /api/students/{id}/activate`
pub async fn activate_student_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = state.student_service.activate_student(id).await?;
    Ok(Json(student.into()))
}

/// Permanently deletes a student.
///
/// # Endpoint
///
/// `DELETE /api/students/{id}`
///
/// # Response
///
/// ```json
/// { "deleted": true }
/// ```
pub async fn delete_student_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.student_service.delete_student(id).await?;
    Ok(Json(DeleteResponse { deleted: true }))
}

/// Returns total, active and inactive counts.
///
/// # Endpoint
///
/// `GET /api/students/stats`
pub async fn student_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.student_service.stats().await?;
    Ok(Json(stats.into()))
}
