//! Repository trait for student data access.

use crate::domain::entities::{NewStudent, Student, UpdateStudent};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing student records.
///
/// Every method is a single statement against the store. Lookups return
/// `Ok(None)` / empty lists for missing data; turning absence into
/// [`AppError::NotFound`] is the service's job.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStudentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Returns every student ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Student>, AppError>;

    /// Finds a student by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// Finds a student by exact (case-sensitive) email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, AppError>;

    /// Lists students with the given last name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Student>, AppError>;

    /// Lists students enrolled in exactly `course`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_course(&self, course: &str) -> Result<Vec<Student>, AppError>;

    /// Lists students whose active flag equals `is_active`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_active(&self, is_active: bool) -> Result<Vec<Student>, AppError>;

    /// Checks whether any student uses `email`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// Lists students whose first or last name contains `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search_by_name(&self, name: &str) -> Result<Vec<Student>, AppError>;

    /// Inserts a new student and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError>;

    /// Overwrites every mutable field of student `id`.
    ///
    /// Returns `Ok(None)` if no such student exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateStudent) -> Result<Option<Student>, AppError>;

    /// Sets only the active flag of student `id`.
    ///
    /// Returns `Ok(None)` if no such student exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_active(&self, id: i64, is_active: bool) -> Result<Option<Student>, AppError>;

    /// Permanently removes student `id`. Returns whether a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts all students and the active ones as `(total, active)`.
    ///
    /// Both numbers come from one snapshot, so `active <= total` always holds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_by_status(&self) -> Result<(i64, i64), AppError>;
}
