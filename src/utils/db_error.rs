//! Classification of database errors raised by write statements.

/// Name of the unique constraint guarding `students.email`.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "students_email_key";

/// Returns `true` if `e` is a unique violation on the student email constraint.
pub fn is_unique_violation_on_email(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(EMAIL_UNIQUE_CONSTRAINT))
}
