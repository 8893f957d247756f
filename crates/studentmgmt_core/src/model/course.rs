//! Course entity model.
//!
//! # Invariants
//! - `id` is assigned by the backing store on first save and never changes.
//! - `name` and `code` are required; `code` follows the `CS101` shape.
//! - `credit` is never negative.

use super::{require_course_code, require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a course record.
pub type CourseId = i64;

/// Academic course record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// `None` until the store assigns an identifier on first save.
    #[serde(rename = "idCourse", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CourseId>,
    /// Human-readable course title.
    pub name: String,
    /// Short catalog code, e.g. `CS101`.
    pub code: String,
    /// Credit hours awarded on completion.
    #[serde(default)]
    pub credit: i64,
    /// Optional free-form syllabus summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Course {
    /// Creates an unsaved course; the store assigns the identifier on save.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            code: code.into(),
            credit: 0,
            description: None,
        }
    }

    /// Creates a course addressing an already-persisted record.
    pub fn with_id(id: CourseId, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, code)
        }
    }

    /// Returns whether this record has been assigned a store identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks field invariants; repositories call this before every write.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.name, "course", "name")?;
        require_non_empty(&self.code, "course", "code")?;
        require_course_code(&self.code)?;
        if self.credit < 0 {
            return Err(ValidationError::NegativeCredit(self.credit));
        }
        Ok(())
    }
}
