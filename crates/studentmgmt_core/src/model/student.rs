//! Student entity model.
//!
//! # Invariants
//! - `first_name`, `last_name` and `email` are required.
//! - `date_of_birth`, when present, is an ISO `YYYY-MM-DD` string.
//! - `department_id`, when present, must reference an existing department;
//!   the repository enforces the reference at write time.

use super::department::DepartmentId;
use super::{require_email, require_iso_date, require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a student record.
pub type StudentId = i64;

/// Enrolled student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// `None` until the store assigns an identifier on first save.
    #[serde(rename = "idStudent", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StudentId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// ISO `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Department the student belongs to, if any.
    #[serde(
        rename = "idDepartment",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub department_id: Option<DepartmentId>,
}

impl Student {
    /// Creates an unsaved student; the store assigns the identifier on save.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            date_of_birth: None,
            address: None,
            department_id: None,
        }
    }

    /// Creates a student addressing an already-persisted record.
    pub fn with_id(
        id: StudentId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(first_name, last_name, email)
        }
    }

    /// Checks field invariants; repositories call this before every write.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.first_name, "student", "first_name")?;
        require_non_empty(&self.last_name, "student", "last_name")?;
        require_non_empty(&self.email, "student", "email")?;
        require_email(&self.email)?;
        if let Some(date) = self.date_of_birth.as_deref() {
            require_iso_date(date, "date_of_birth")?;
        }
        Ok(())
    }
}
