//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::StudentService;
use crate::infrastructure::persistence::PgStudentRepository;

/// Student service backed by PostgreSQL.
pub type PgStudentService = StudentService<PgStudentRepository>;

/// Cloned into each request; holds only shared, immutable handles.
#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<PgStudentService>,
}

impl AppState {
    pub fn new(student_service: Arc<PgStudentService>) -> Self {
        Self { student_service }
    }
}
