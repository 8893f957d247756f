//! Domain models for the student management core.
//!
//! # Responsibility
//! - Define canonical entity records shared by repositories and services.
//! - Enforce field-level invariants through `validate()` before persistence.
//!
//! # Invariants
//! - Every persisted entity carries a store-assigned `i64` identifier;
//!   unsaved entities carry `id = None`.
//! - Wire field names follow the upstream payload schema (`idCourse`,
//!   `firstName`, `enrollmentDate`, ...).

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod course;
pub mod department;
pub mod enrollment;
pub mod student;

/// Course codes look like `CS101` or `MATH 2201`.
static COURSE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2,8} ?\d{2,4}$").expect("course code pattern is valid"));

/// Coarse shape check only; deliverability is not this layer's concern.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Calendar dates are exchanged as ISO `YYYY-MM-DD` strings.
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

/// Field-level invariant violations detected before any write.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
    /// Course code does not match the expected `CS101`-style shape.
    InvalidCourseCode(String),
    /// Credit hours must not be negative.
    NegativeCredit(i64),
    /// Student email does not look like an address.
    InvalidEmail(String),
    /// Date field is not an ISO `YYYY-MM-DD` string.
    InvalidDate {
        field: &'static str,
        value: String,
    },
    /// Enrollment grade must stay within 0.0..=100.0.
    GradeOutOfRange(f64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { entity, field } => {
                write!(f, "{entity}.{field} must not be empty")
            }
            Self::InvalidCourseCode(code) => {
                write!(f, "invalid course code `{code}`; expected e.g. `CS101`")
            }
            Self::NegativeCredit(credit) => {
                write!(f, "course credit must not be negative, got {credit}")
            }
            Self::InvalidEmail(email) => write!(f, "invalid student email `{email}`"),
            Self::InvalidDate { field, value } => {
                write!(f, "invalid {field} `{value}`; expected YYYY-MM-DD")
            }
            Self::GradeOutOfRange(grade) => {
                write!(f, "enrollment grade must be within 0..=100, got {grade}")
            }
        }
    }
}

impl Error for ValidationError {}

fn require_non_empty(
    value: &str,
    entity: &'static str,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(())
}

fn require_course_code(code: &str) -> Result<(), ValidationError> {
    if !COURSE_CODE_RE.is_match(code) {
        return Err(ValidationError::InvalidCourseCode(code.to_string()));
    }
    Ok(())
}

fn require_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

fn require_iso_date(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if !ISO_DATE_RE.is_match(value) {
        return Err(ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
