//! Invigilator model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An invigilating faculty member.
///
/// Equality and hashing use both `id` and `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacultyMember {
    pub id: String,
    pub name: String,
}

impl FacultyMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for FacultyMember {
    /// Renders as `"{id} - {name}"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}
