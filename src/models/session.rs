//! Exam session (timetable row) model.

use serde::{Deserialize, Serialize};

use super::Cohort;

/// One timetable row: a date, a time and up to one exam code per cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSession {
    /// Zero-based position in the timetable.
    pub row: usize,
    pub date: String,
    pub time: String,
    pub year2: Option<String>,
    pub year3: Option<String>,
    pub year4: Option<String>,
}

/// Which cohorts a session seats.
///
/// Computed once per row with first-match precedence: no code at all,
/// then Year2 + Year3 together, then Year2, Year3, Year4 alone. A Year4 code
/// that appears next to a Year2 or Year3 code is therefore not seated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    /// Year2 and Year3 share the rooms bench by bench.
    Paired,
    Year2Only,
    Year3Only,
    /// Seated like the other single-cohort kinds; rendered under its own label.
    Year4Only,
    /// No cohort code present; the row is skipped.
    None,
}

impl SessionKind {
    /// Cohorts seated, in slot order.
    pub fn cohorts(self) -> &'static [Cohort] {
        match self {
            SessionKind::Paired => &[Cohort::Year2, Cohort::Year3],
            SessionKind::Year2Only => &[Cohort::Year2],
            SessionKind::Year3Only => &[Cohort::Year3],
            SessionKind::Year4Only => &[Cohort::Year4],
            SessionKind::None => &[],
        }
    }
}

impl ExamSession {
    pub fn new(row: usize, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            row,
            date: date.into(),
            time: time.into(),
            year2: None,
            year3: None,
            year4: None,
        }
    }

    /// Sets the exam code for a cohort.
    pub fn with_code(mut self, cohort: Cohort, code: impl Into<String>) -> Self {
        *self.code_slot(cohort) = Some(code.into());
        self
    }

    fn code_slot(&mut self, cohort: Cohort) -> &mut Option<String> {
        match cohort {
            Cohort::Year2 => &mut self.year2,
            Cohort::Year3 => &mut self.year3,
            Cohort::Year4 => &mut self.year4,
        }
    }

    /// Exam code for a cohort, if scheduled.
    pub fn code(&self, cohort: Cohort) -> Option<&str> {
        match cohort {
            Cohort::Year2 => self.year2.as_deref(),
            Cohort::Year3 => self.year3.as_deref(),
            Cohort::Year4 => self.year4.as_deref(),
        }
    }

    pub fn kind(&self) -> SessionKind {
        match (&self.year2, &self.year3, &self.year4) {
            (None, None, None) => SessionKind::None,
            (Some(_), Some(_), _) => SessionKind::Paired,
            (Some(_), None, _) => SessionKind::Year2Only,
            (None, Some(_), _) => SessionKind::Year3Only,
            (None, None, Some(_)) => SessionKind::Year4Only,
        }
    }

    /// Exam codes of the cohorts actually seated.
    pub fn exam_codes(&self) -> Vec<String> {
        self.kind()
            .cohorts()
            .iter()
            .filter_map(|&c| self.code(c).map(str::to_string))
            .collect()
    }
}
