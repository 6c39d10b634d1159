//! Core domain entities.
//!
//! - [`Student`] - A persisted student record
//! - [`NewStudent`] - Input for creating a record
//! - [`UpdateStudent`] - Full replacement of a record's mutable fields

pub mod student;

pub use student::{NewStudent, Student, UpdateStudent};
