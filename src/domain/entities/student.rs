//! Domain entity representing a student record.

use chrono::{DateTime, NaiveDate, Utc};

/// A student as stored in the `students` table.
///
/// `id` is assigned by the database on insert and never changes afterwards.
/// `email` is unique across all students.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub course: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Full name in "First Last" form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input data for creating a new student.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub course: Option<String>,
    pub is_active: bool,
}

/// Replacement values for every mutable field of an existing student.
///
/// Unlike a patch, fields set to `None` here clear the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub course: Option<String>,
    pub is_active: bool,
}
