//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgStudentRepository`] - Student storage, lookups, search and counts

pub mod pg_student_repository;

pub use pg_student_repository::PgStudentRepository;
