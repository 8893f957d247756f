//! Enrollment entity model linking students to courses.
//!
//! # Invariants
//! - `student_id` and `course_id` must reference existing records; the
//!   repository enforces both references at write time.
//! - `grade` stays within `0.0..=100.0`.
//! - `enrollment_date`, when present, is an ISO `YYYY-MM-DD` string.

use super::course::CourseId;
use super::student::StudentId;
use super::{require_iso_date, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for an enrollment record.
pub type EnrollmentId = i64;

/// Lifecycle state of one student/course enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    /// Currently attending.
    Active,
    /// Finished with a final grade.
    Completed,
    /// Left during the add/drop window.
    Dropped,
    /// Finished without a passing grade.
    Failed,
    /// Left after the add/drop window.
    Withdrawn,
}

/// Link record between one student and one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// `None` until the store assigns an identifier on first save.
    #[serde(
        rename = "idEnrollment",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<EnrollmentId>,
    #[serde(rename = "idStudent")]
    pub student_id: StudentId,
    #[serde(rename = "idCourse")]
    pub course_id: CourseId,
    /// ISO `YYYY-MM-DD`.
    #[serde(
        rename = "enrollmentDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub enrollment_date: Option<String>,
    /// Percentage grade; meaningful once status leaves `Active`.
    #[serde(default)]
    pub grade: f64,
    pub status: EnrollmentStatus,
}

impl Enrollment {
    /// Creates an unsaved enrollment with status `Active` and grade `0.0`.
    pub fn new(student_id: StudentId, course_id: CourseId) -> Self {
        Self {
            id: None,
            student_id,
            course_id,
            enrollment_date: None,
            grade: 0.0,
            status: EnrollmentStatus::Active,
        }
    }

    /// Creates an enrollment addressing an already-persisted record.
    pub fn with_id(id: EnrollmentId, student_id: StudentId, course_id: CourseId) -> Self {
        Self {
            id: Some(id),
            ..Self::new(student_id, course_id)
        }
    }

    /// Checks field invariants; repositories call this before every write.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(date) = self.enrollment_date.as_deref() {
            require_iso_date(date, "enrollment_date")?;
        }
        if !(0.0..=100.0).contains(&self.grade) {
            return Err(ValidationError::GradeOutOfRange(self.grade));
        }
        Ok(())
    }
}
