//! Core domain logic for the student management backend.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::{Course, CourseId};
pub use model::department::{Department, DepartmentId};
pub use model::enrollment::{Enrollment, EnrollmentId, EnrollmentStatus};
pub use model::student::{Student, StudentId};
pub use model::ValidationError;
pub use repo::course_repo::{CourseStore, SqliteCourseStore};
pub use repo::department_repo::{DepartmentStore, SqliteDepartmentStore};
pub use repo::enrollment_repo::{EnrollmentStore, SqliteEnrollmentStore};
pub use repo::student_repo::{SqliteStudentStore, StudentStore};
pub use repo::{RepoError, RepoResult};
pub use service::course_service::CourseService;
pub use service::department_service::DepartmentService;
pub use service::enrollment_service::EnrollmentService;
pub use service::student_service::StudentService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
