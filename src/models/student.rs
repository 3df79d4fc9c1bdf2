//! Student identifiers, cohorts and bench pairing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque student identifier (typically an enrollment number).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// An academic-year group examined as one roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cohort {
    Year2,
    Year3,
    Year4,
}

impl Cohort {
    /// All cohorts in timetable column order.
    pub const ALL: [Cohort; 3] = [Cohort::Year2, Cohort::Year3, Cohort::Year4];

    /// Timetable column carrying this cohort's exam code.
    pub const fn timetable_column(self) -> &'static str {
        match self {
            Cohort::Year2 => "B.Tech II Year",
            Cohort::Year3 => "B.Tech III Year",
            Cohort::Year4 => "B.Tech IV Year",
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Cohort::Year2 => "2nd",
            Cohort::Year3 => "3rd",
            Cohort::Year4 => "4th",
        };
        f.write_str(s)
    }
}

/// One bench cell: up to two students from the cohorts sharing a room.
///
/// `first` holds the earlier cohort (Year2 in a paired session, or the only
/// cohort otherwise); `second` holds the partner cohort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedSeat {
    pub first: Option<StudentId>,
    pub second: Option<StudentId>,
}

impl PairedSeat {
    pub fn new(first: Option<StudentId>, second: Option<StudentId>) -> Self {
        Self { first, second }
    }

    /// A seat with no partner.
    pub fn solo(student: StudentId) -> Self {
        Self {
            first: Some(student),
            second: None,
        }
    }

    /// Number of filled slots (0..=2).
    pub fn occupants(&self) -> usize {
        usize::from(self.first.is_some()) + usize::from(self.second.is_some())
    }

    /// Cell text: filled slots joined by a newline, blank when empty.
    pub fn render(&self) -> String {
        match (&self.first, &self.second) {
            (Some(a), Some(b)) => format!("{a}\n{b}"),
            (Some(a), None) => a.to_string(),
            (None, Some(b)) => b.to_string(),
            (None, None) => String::new(),
        }
    }
}
