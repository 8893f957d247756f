//! Department entity model.

use super::{require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a department record.
pub type DepartmentId = i64;

/// Academic department record. Only `name` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// `None` until the store assigns an identifier on first save.
    #[serde(
        rename = "idDepartment",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<DepartmentId>,
    /// Department name, e.g. `Computer Science`.
    pub name: String,
    /// Optional campus location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Optional contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Optional name of the department head.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
}

impl Department {
    /// Creates an unsaved department; the store assigns the identifier on save.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: None,
            phone: None,
            head: None,
        }
    }

    /// Creates a department addressing an already-persisted record.
    pub fn with_id(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name)
        }
    }

    /// Checks field invariants; repositories call this before every write.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.name, "department", "name")
    }
}
