//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; the PostgreSQL implementation
//! lives in `crate::infrastructure::persistence`, and mock implementations are
//! generated via `mockall` for service tests.
//!
//! See integration tests in `tests/repository_student.rs` for usage examples.

pub mod student_repository;

pub use student_repository::StudentRepository;

#[cfg(test)]
pub use student_repository::MockStudentRepository;
