//! Cohort rosters.
//!
//! Turns each cohort's student table into an ordered list of
//! [`StudentId`]s. Roster order is the input order (normally roll-number
//! order) and is preserved all the way into the seat grid.
//!
//! A roster that cannot be read is not fatal: the cohort is stored as empty,
//! the failure is recorded, and sessions for that cohort seat nobody.

use std::collections::BTreeMap;

use tracing::{error, info};

use crate::error::InputFormatError;
use crate::models::{Cohort, StudentId};
use crate::table::Table;

/// Column holding the student identifier.
pub const ENROLLMENT_COLUMN: &str = "Enrollment Number";

const TABLE: &str = "student";

/// Extracts student ids from a roster table.
///
/// Rows whose identifier cell is blank or unusable are dropped.
pub fn extract_roster(table: &Table) -> Result<Vec<StudentId>, InputFormatError> {
    let [col] = table.require_columns(TABLE, [ENROLLMENT_COLUMN])?;
    Ok((0..table.row_count())
        .filter_map(|row| table.cell(row, col).as_text())
        .map(StudentId)
        .collect())
}

/// Ordered rosters keyed by cohort.
#[derive(Debug, Clone, Default)]
pub struct RosterIndex {
    rosters: BTreeMap<Cohort, Vec<StudentId>>,
    diagnostics: Vec<(Cohort, InputFormatError)>,
}

impl RosterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cohort's roster directly.
    pub fn with_roster<I, S>(mut self, cohort: Cohort, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rosters
            .insert(cohort, ids.into_iter().map(|s| StudentId(s.into())).collect());
        self
    }

    /// Loads a cohort's roster from its table.
    ///
    /// The roster is stored either way; on failure it is empty and the error
    /// is kept in [`diagnostics`](Self::diagnostics). Returns the number of
    /// students loaded.
    pub fn load(&mut self, cohort: Cohort, table: Option<&Table>) -> Result<usize, InputFormatError> {
        let extracted = table
            .ok_or(InputFormatError::MissingTable { table: TABLE })
            .and_then(extract_roster);

        match extracted {
            Ok(ids) => {
                let count = ids.len();
                info!(%cohort, count, "extracted roll numbers");
                self.rosters.insert(cohort, ids);
                Ok(count)
            }
            Err(e) => {
                error!(%cohort, error = %e, "error extracting roll numbers");
                self.rosters.insert(cohort, Vec::new());
                self.diagnostics.push((cohort, e.clone()));
                Err(e)
            }
        }
    }

    /// Roster for a cohort; empty if never loaded.
    pub fn roster(&self, cohort: Cohort) -> &[StudentId] {
        self.rosters.get(&cohort).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Load failures recorded so far.
    pub fn diagnostics(&self) -> &[(Cohort, InputFormatError)] {
        &self.diagnostics
    }

    /// Cohorts with a stored roster, in cohort order.
    pub fn iter(&self) -> impl Iterator<Item = (Cohort, &[StudentId])> {
        self.rosters.iter().map(|(c, ids)| (*c, ids.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    fn ids(index: &RosterIndex, cohort: Cohort) -> Vec<&str> {
        index.roster(cohort).iter().map(StudentId::as_str).collect()
    }

    #[test]
    fn test_extract_preserves_order_and_drops_blanks() {
        let table = Table::new(["Name", "Enrollment Number"])
            .with_row([Cell::from("A"), Cell::from("21CS003")])
            .with_row([Cell::from("B"), Cell::Empty])
            .with_row([Cell::from("C"), Cell::from(21001.0)])
            .with_row([Cell::from("D"), Cell::from("  ")])
            .with_row([Cell::from("E"), Cell::from("21CS001")]);

        let roster = extract_roster(&table).unwrap();
        let roster: Vec<&str> = roster.iter().map(StudentId::as_str).collect();
        assert_eq!(roster, vec!["21CS003", "21001", "21CS001"]);
    }

    #[test]
    fn test_load_records_count() {
        let table = Table::new(["Enrollment Number"])
            .with_row(["S1"])
            .with_row(["S2"]);
        let mut index = RosterIndex::new();
        assert_eq!(index.load(Cohort::Year2, Some(&table)), Ok(2));
        assert_eq!(ids(&index, Cohort::Year2), vec!["S1", "S2"]);
        assert!(index.diagnostics().is_empty());
    }

    #[test]
    fn test_missing_column_degrades_to_empty() {
        let table = Table::new(["Roll"]).with_row(["S1"]);
        let mut index = RosterIndex::new().with_roster(Cohort::Year3, ["old"]);

        let err = index.load(Cohort::Year3, Some(&table)).unwrap_err();
        assert!(matches!(err, InputFormatError::MissingColumn { column, .. } if column == ENROLLMENT_COLUMN));
        assert!(index.roster(Cohort::Year3).is_empty());
        assert_eq!(index.diagnostics().len(), 1);
    }

    #[test]
    fn test_missing_table_degrades_to_empty() {
        let mut index = RosterIndex::new();
        assert!(index.load(Cohort::Year4, None).is_err());
        assert!(index.roster(Cohort::Year4).is_empty());
        assert_eq!(index.diagnostics()[0].0, Cohort::Year4);
    }

    #[test]
    fn test_unloaded_cohort_is_empty() {
        let index = RosterIndex::new().with_roster(Cohort::Year2, ["S1"]);
        assert!(index.roster(Cohort::Year4).is_empty());
        assert_eq!(index.iter().count(), 1);
    }
}
