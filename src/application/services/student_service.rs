//! Student management service.

use chrono::{NaiveDate, Utc};
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student, UpdateStudent};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;

const RESOURCE: &str = "Student";

/// Aggregate counts computed from the current contents of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentStats {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
}

/// Service enforcing the business rules around student records.
///
/// Handles:
/// - Email uniqueness on create and on update when the email changes
/// - Lookup-or-fail before any mutation of an existing record
/// - Soft (activate/deactivate) and hard (delete) removal
pub struct StudentService<R: StudentRepository> {
    repository: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a new student service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every student ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves a student by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_student(&self, id: i64) -> Result<Student, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, "id", id))
    }

    /// Retrieves a student by exact email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no student uses the email.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_student_by_email(&self, email: &str) -> Result<Student, AppError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, "email", email))
    }

    /// Checks whether any student already uses `email`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        self.repository.exists_by_email(email).await
    }

    /// Creates a new student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the birth date lies in the future.
    /// Returns [`AppError::Conflict`] if the email already exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_student(&self, new_student: NewStudent) -> Result<Student, AppError> {
        validate_birth_date(new_student.date_of_birth)?;

        if self.email_exists(&new_student.email).await? {
            tracing::warn!(email = %new_student.email, "Rejected student with duplicate email");
            return Err(AppError::email_taken(&new_student.email));
        }

        let created = self.repository.create(new_student).await?;
        tracing::info!(student_id = created.id, "Student created");

        Ok(created)
    }

    /// Replaces every mutable field of an existing student.
    ///
    /// The uniqueness check only runs when the submitted email differs from the
    /// stored one, so resubmitting a record unchanged never conflicts with itself.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Validation`] if the birth date lies in the future.
    /// Returns [`AppError::Conflict`] if the new email belongs to another student.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_student(
        &self,
        id: i64,
        update: UpdateStudent,
    ) -> Result<Student, AppError> {
        let current = self.get_student(id).await?;

        validate_birth_date(update.date_of_birth)?;

        if current.email != update.email && self.email_exists(&update.email).await? {
            tracing::warn!(student_id = id, email = %update.email, "Rejected email change to a taken address");
            return Err(AppError::email_taken(&update.email));
        }

        let updated = self
            .repository
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, "id", id))?;
        tracing::info!(student_id = id, "Student updated");

        Ok(updated)
    }

    /// Marks a student inactive without touching any other field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn deactivate_student(&self, id: i64) -> Result<Student, AppError> {
        self.set_active(id, false).await
    }

    /// Marks a student active without touching any other field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn activate_student(&self, id: i64) -> Result<Student, AppError> {
        self.set_active(id, true).await
    }

    /// Permanently deletes a student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_student(&self, id: i64) -> Result<(), AppError> {
        let student = self.get_student(id).await?;

        if !self.repository.delete(student.id).await? {
            return Err(AppError::not_found(RESOURCE, "id", id));
        }
        tracing::info!(student_id = id, "Student deleted");

        Ok(())
    }

    /// Finds students whose first or last name contains `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search_students(&self, name: &str) -> Result<Vec<Student>, AppError> {
        self.repository.search_by_name(name).await
    }

    /// Lists active students.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn active_students(&self) -> Result<Vec<Student>, AppError> {
        self.repository.find_by_active(true).await
    }

    /// Lists inactive students.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn inactive_students(&self) -> Result<Vec<Student>, AppError> {
        self.repository.find_by_active(false).await
    }

    /// Lists students enrolled in exactly `course`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn students_by_course(&self, course: &str) -> Result<Vec<Student>, AppError> {
        self.repository.find_by_course(course).await
    }

    /// Computes total, active and inactive counts.
    ///
    /// Both counts are taken by a single statement, so they share one snapshot
    /// and `inactive = total - active` is never negative.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats(&self) -> Result<StudentStats, AppError> {
        let (total, active) = self.repository.count_by_status().await?;

        Ok(StudentStats {
            total,
            active,
            inactive: total - active,
        })
    }

    async fn set_active(&self, id: i64, is_active: bool) -> Result<Student, AppError> {
        self.get_student(id).await?;

        let student = self
            .repository
            .set_active(id, is_active)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, "id", id))?;
        tracing::info!(student_id = id, is_active, "Student active flag changed");

        Ok(student)
    }
}

/// Rejects birth dates after today.
fn validate_birth_date(date_of_birth: Option<NaiveDate>) -> Result<(), AppError> {
    let Some(date) = date_of_birth else {
        return Ok(());
    };

    let today = Utc::now().date_naive();
    if date > today {
        return Err(AppError::bad_request(
            "Validation failed",
            json!({ "dateOfBirth": ["must be a date in the past"] }),
        ));
    }

    Ok(())
}
