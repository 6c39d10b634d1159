//! PostgreSQL implementation of the student repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student, UpdateStudent};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_email;

const STUDENT_COLUMNS: &str = "id, first_name, last_name, email, phone_number, date_of_birth, \
     address, course, is_active, created_at, updated_at";

/// Columns that support equality lookups.
#[derive(Debug, Clone, Copy)]
enum FilterColumn {
    Id,
    Email,
    LastName,
    Course,
    IsActive,
}

impl FilterColumn {
    fn as_sql(self) -> &'static str {
        match self {
            FilterColumn::Id => "id",
            FilterColumn::Email => "email",
            FilterColumn::LastName => "last_name",
            FilterColumn::Course => "course",
            FilterColumn::IsActive => "is_active",
        }
    }
}

/// Builds `SELECT <all columns> FROM students WHERE <column> = $1 ORDER BY id`.
fn select_where(column: FilterColumn) -> String {
    format!(
        "SELECT {STUDENT_COLUMNS} FROM students WHERE {} = $1 ORDER BY id",
        column.as_sql()
    )
}

/// Maps a failed INSERT/UPDATE, turning an email collision into the domain conflict.
fn map_write_error(e: sqlx::Error, email: &str) -> AppError {
    if is_unique_violation_on_email(&e) {
        return AppError::email_taken(email);
    }
    e.into()
}

/// PostgreSQL repository for student records.
///
/// Queries are plain parameterized statements bound at runtime, so the crate
/// builds without a live database.
pub struct PgStudentRepository {
    pool: Arc<PgPool>,
}

impl PgStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let sql = format!("SELECT {STUDENT_COLUMNS} FROM students ORDER BY id");
        let rows = sqlx::query_as::<_, Student>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, Student>(&select_where(FilterColumn::Id))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, Student>(&select_where(FilterColumn::Email))
            .bind(email)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row)
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, Student>(&select_where(FilterColumn::LastName))
            .bind(last_name)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn find_by_course(&self, course: &str) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, Student>(&select_where(FilterColumn::Course))
            .bind(course)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn find_by_active(&self, is_active: bool) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, Student>(&select_where(FilterColumn::IsActive))
            .bind(is_active)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM students WHERE email = $1)")
                .bind(email)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Student>, AppError> {
        // strpos keeps `%` and `_` in the input literal, unlike LIKE.
        let sql = format!(
            r#"
            SELECT {STUDENT_COLUMNS}
            FROM students
            WHERE strpos(lower(first_name), lower($1)) > 0
               OR strpos(lower(last_name), lower($1)) > 0
            ORDER BY id
            "#
        );
        let rows = sqlx::query_as::<_, Student>(&sql)
            .bind(name)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError> {
        let sql = format!(
            r#"
            INSERT INTO students
                (first_name, last_name, email, phone_number, date_of_birth, address, course, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {STUDENT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(&new_student.first_name)
            .bind(&new_student.last_name)
            .bind(&new_student.email)
            .bind(&new_student.phone_number)
            .bind(new_student.date_of_birth)
            .bind(&new_student.address)
            .bind(&new_student.course)
            .bind(new_student.is_active)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| map_write_error(e, &new_student.email))?;

        Ok(row)
    }

    async fn update(&self, id: i64, update: UpdateStudent) -> Result<Option<Student>, AppError> {
        let sql = format!(
            r#"
            UPDATE students SET
                first_name    = $2,
                last_name     = $3,
                email         = $4,
                phone_number  = $5,
                date_of_birth = $6,
                address       = $7,
                course        = $8,
                is_active     = $9,
                updated_at    = NOW()
            WHERE id = $1
            RETURNING {STUDENT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .bind(&update.first_name)
            .bind(&update.last_name)
            .bind(&update.email)
            .bind(&update.phone_number)
            .bind(update.date_of_birth)
            .bind(&update.address)
            .bind(&update.course)
            .bind(update.is_active)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| map_write_error(e, &update.email))?;

        Ok(row)
    }

    async fn set_active(&self, id: i64, is_active: bool) -> Result<Option<Student>, AppError> {
        let sql = format!(
            r#"
            UPDATE students SET is_active = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {STUDENT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .bind(is_active)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_status(&self) -> Result<(i64, i64), AppError> {
        let counts: (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE is_active) FROM students",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(counts)
    }
}
