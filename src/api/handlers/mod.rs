//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod students;

pub use health::health_handler;
pub use students::{
    activate_student_handler, active_students_handler, create_student_handler,
    deactivate_student_handler, delete_student_handler, get_student_by_email_handler,
    get_student_handler, inactive_students_handler, list_students_handler,
    search_students_handler, student_stats_handler, students_by_course_handler,
    update_student_handler,
};
