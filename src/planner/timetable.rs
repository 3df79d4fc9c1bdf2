//! Timetable schema mapping.

use crate::error::{InputFormatError, RowProcessingError};
use crate::models::{Cohort, ExamSession};
use crate::table::{Cell, Table};

/// Required timetable columns: date, time, then one exam code column per cohort.
pub const TIMETABLE_COLUMNS: [&str; 5] = [
    "Date",
    "Time",
    Cohort::Year2.timetable_column(),
    Cohort::Year3.timetable_column(),
    Cohort::Year4.timetable_column(),
];

const TABLE: &str = "timetable";

/// Resolved column positions.
#[derive(Debug, Clone, Copy)]
pub struct TimetableColumns {
    date: usize,
    time: usize,
    codes: [(Cohort, usize); 3],
}

impl TimetableColumns {
    /// Resolves every required column.
    pub fn resolve(table: &Table) -> Result<Self, InputFormatError> {
        let [date, time, year2, year3, year4] = table.require_columns(TABLE, TIMETABLE_COLUMNS)?;
        Ok(Self {
            date,
            time,
            codes: [
                (Cohort::Year2, year2),
                (Cohort::Year3, year3),
                (Cohort::Year4, year4),
            ],
        })
    }

    /// Reads one row into a session.
    pub fn session(&self, table: &Table, row: usize) -> Result<ExamSession, RowProcessingError> {
        let date = required_text(table.cell(row, self.date), row, TIMETABLE_COLUMNS[0])?;
        let time = required_text(table.cell(row, self.time), row, TIMETABLE_COLUMNS[1])?;

        let mut session = ExamSession::new(row, date, time);
        for (cohort, col) in self.codes {
            if let Some(code) = table.cell(row, col).as_text() {
                session = session.with_code(cohort, code);
            }
        }
        Ok(session)
    }
}

fn required_text(cell: &Cell, row: usize, column: &'static str) -> Result<String, RowProcessingError> {
    match cell {
        Cell::Number(n) if !n.is_finite() && !n.is_nan() => Err(RowProcessingError::InvalidField {
            row,
            column,
            reason: format!("is not a valid value ({n})"),
        }),
        _ => cell
            .as_text()
            .ok_or(RowProcessingError::MissingField { row, column }),
    }
}

/// Reads every timetable row, in order.
///
/// A schema problem fails the whole table; a bad row only fails its entry.
pub fn read_sessions(
    table: &Table,
) -> Result<Vec<Result<ExamSession, RowProcessingError>>, InputFormatError> {
    let columns = TimetableColumns::resolve(table)?;
    Ok((0..table.row_count())
        .map(|row| columns.session(table, row))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionKind;
    use crate::table::{CalendarDate, ClockTime};

    fn timetable() -> Table {
        Table::new(TIMETABLE_COLUMNS)
    }

    #[test]
    fn test_reads_dates_times_and_codes() {
        let table = timetable().with_row([
            Cell::from(CalendarDate { year: 2024, month: 5, day: 10 }),
            Cell::from(ClockTime { hour: 9, minute: 30, second: 0 }),
            Cell::from("CS201"),
            Cell::from("CS301"),
            Cell::Empty,
        ]);
        let sessions = read_sessions(&table).unwrap();
        let session = sessions[0].as_ref().unwrap();
        assert_eq!(session.date, "2024-05-10");
        assert_eq!(session.time, "09-30-00");
        assert_eq!(session.kind(), SessionKind::Paired);
    }

    #[test]
    fn test_text_dates_pass_through() {
        let table = timetable().with_row(["12/05/2024", "2 PM", "", "", "CS401"]);
        let sessions = read_sessions(&table).unwrap();
        let session = sessions[0].as_ref().unwrap();
        assert_eq!(session.date, "12/05/2024");
        assert_eq!(session.time, "2 PM");
        assert_eq!(session.kind(), SessionKind::Year4Only);
    }

    #[test]
    fn test_bad_row_does_not_fail_table() {
        let table = timetable()
            .with_row([Cell::Empty, Cell::from("10-00-00"), Cell::from("CS201"), Cell::Empty, Cell::Empty])
            .with_row([Cell::from("2024-05-11"), Cell::from(f64::INFINITY), Cell::Empty, Cell::Empty, Cell::Empty])
            .with_row([Cell::from("2024-05-12"), Cell::from("10-00-00"), Cell::Empty, Cell::Empty, Cell::Empty]);
        let sessions = read_sessions(&table).unwrap();
        assert_eq!(
            sessions[0],
            Err(RowProcessingError::MissingField { row: 0, column: "Date" })
        );
        assert!(matches!(
            sessions[1],
            Err(RowProcessingError::InvalidField { row: 1, column: "Time", .. })
        ));
        assert_eq!(sessions[2].as_ref().unwrap().kind(), SessionKind::None);
    }

    #[test]
    fn test_code_columns_follow_cohort_order() {
        let names: Vec<&str> = Cohort::ALL.iter().map(|c| c.timetable_column()).collect();
        assert_eq!(&TIMETABLE_COLUMNS[2..], names.as_slice());
        assert_eq!(TIMETABLE_COLUMNS[..2], ["Date", "Time"][..]);
    }

    #[test]
    fn test_missing_column_fails_table() {
        let table = Table::new(["Date", "Time", "B.Tech II Year"]);
        assert_eq!(
            read_sessions(&table).unwrap_err(),
            InputFormatError::MissingColumn {
                table: "timetable",
                column: "B.Tech III Year"
            }
        );
    }

    #[test]
    fn test_numeric_exam_codes() {
        let table = timetable().with_row([
            Cell::from("d"),
            Cell::from("t"),
            Cell::from(201i64),
            Cell::Empty,
            Cell::Empty,
        ]);
        let sessions = read_sessions(&table).unwrap();
        assert_eq!(sessions[0].as_ref().unwrap().code(Cohort::Year2), Some("201"));
    }
}
