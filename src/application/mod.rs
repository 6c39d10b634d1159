//! Application layer services implementing business logic.
//!
//! Services consume repository traits, apply business rules, and provide a
//! clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::student_service::StudentService`] - Student records management

pub mod services;
