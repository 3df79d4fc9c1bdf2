//! In-memory tabular input.
//!
//! Spreadsheet readers live outside this crate; they hand over a [`Table`]
//! (header row plus cells). Column lookup goes through [`Table::require_columns`]
//! so a missing header fails at the loading boundary with a specific
//! [`InputFormatError`] instead of somewhere inside the allocation logic.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InputFormatError;

/// A calendar date cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// A clock time cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl fmt::Display for CalendarDate {
    /// Formats as `%Y-%m-%d`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for ClockTime {
    /// Formats as `%H-%M-%S`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:02}", self.hour, self.minute, self.second)
    }
}

/// Largest value [`Cell::as_count`] accepts.
pub const MAX_COUNT: usize = u32::MAX as usize;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Blank or missing value.
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Date(CalendarDate),
    Time(ClockTime),
}

impl Cell {
    /// Whether the cell carries no usable value.
    ///
    /// Whitespace-only text and NaN count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(n) => n.is_nan(),
            Cell::Date(_) | Cell::Time(_) => false,
        }
    }

    /// Renders the cell as text, or `None` when empty.
    ///
    /// Whole numbers render without a fractional part, so an enrollment
    /// number read as `20231001.0` becomes `"20231001"`.
    pub fn as_text(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.trim().to_string()),
            Cell::Number(n) => {
                if !n.is_finite() {
                    None
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(n.to_string())
                }
            }
            Cell::Date(d) => Some(d.to_string()),
            Cell::Time(t) => Some(t.to_string()),
        }
    }

    /// Coerces the cell to a non-negative integer no larger than [`MAX_COUNT`].
    ///
    /// Fractional numbers truncate toward zero.
    pub fn as_count(&self) -> Result<usize, String> {
        let value = match self {
            Cell::Number(n) if n.is_finite() => n.trunc(),
            Cell::Text(s) => {
                let s = s.trim();
                if let Ok(v) = s.parse::<i64>() {
                    v as f64
                } else {
                    match s.parse::<f64>() {
                        Ok(v) if v.is_finite() => v.trunc(),
                        _ => return Err(format!("is not numeric ('{s}')")),
                    }
                }
            }
            Cell::Empty => return Err("is empty".to_string()),
            other => return Err(format!("is not numeric ({other:?})")),
        };
        if value < 0.0 {
            return Err(format!("is negative ({value})"));
        }
        if value > MAX_COUNT as f64 {
            return Err(format!("is too large ({value})"));
        }
        Ok(value as usize)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<CalendarDate> for Cell {
    fn from(value: CalendarDate) -> Self {
        Cell::Date(value)
    }
}

impl From<ClockTime> for Cell {
    fn from(value: ClockTime) -> Self {
        Cell::Time(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Empty)
    }
}

/// A header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column headers, in input order.
    pub columns: Vec<String>,
    /// Data rows. Short rows read as empty cells past their end.
    pub rows: Vec<Vec<Cell>>,
}

static EMPTY: Cell = Cell::Empty;

impl Table {
    /// Creates a table with the given headers and no rows.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn with_row<C: Into<Cell>>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a header, matched after trimming surrounding whitespace.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.trim() == name)
    }

    /// Resolves every named column or reports the first one missing.
    pub fn require_columns<const N: usize>(
        &self,
        table: &'static str,
        names: [&'static str; N],
    ) -> Result<[usize; N], InputFormatError> {
        let mut indices = [0usize; N];
        for (slot, name) in indices.iter_mut().zip(names) {
            *slot = self
                .column_index(name)
                .ok_or(InputFormatError::MissingColumn {
                    table,
                    column: name,
                })?;
        }
        Ok(indices)
    }

    /// Cell at `(row, column)`, [`Cell::Empty`] when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_columns_reports_missing() {
        let table = Table::new(["Room Name", "Rows"]);
        let err = table
            .require_columns("room", ["Room Name", "Total Benches"])
            .unwrap_err();
        assert_eq!(
            err,
            InputFormatError::MissingColumn {
                table: "room",
                column: "Total Benches"
            }
        );
    }

    #[test]
    fn test_require_columns_trims_headers() {
        let table = Table::new([" Date ", "Time"]);
        assert_eq!(table.require_columns("t", ["Time", "Date"]).unwrap(), [1, 0]);
    }

    #[test]
    fn test_short_rows_read_empty() {
        let table = Table::new(["a", "b"]).with_row(["x"]);
        assert_eq!(table.cell(0, 0), &Cell::Text("x".into()));
        assert!(table.cell(0, 1).is_empty());
        assert!(table.cell(5, 0).is_empty());
    }

    #[test]
    fn test_cell_text_rendering() {
        assert_eq!(Cell::from(20231001.0).as_text().as_deref(), Some("20231001"));
        assert_eq!(Cell::from(1.5).as_text().as_deref(), Some("1.5"));
        assert_eq!(Cell::from("  S1 ").as_text().as_deref(), Some("S1"));
        assert_eq!(Cell::from("   ").as_text(), None);
        assert_eq!(Cell::Number(f64::NAN).as_text(), None);

        let date = CalendarDate { year: 2024, month: 5, day: 10 };
        assert_eq!(Cell::from(date).as_text().as_deref(), Some("2024-05-10"));
        let time = ClockTime { hour: 9, minute: 0, second: 0 };
        assert_eq!(Cell::from(time).as_text().as_deref(), Some("09-00-00"));
    }

    #[test]
    fn test_cell_count_coercion() {
        assert_eq!(Cell::from(30i64).as_count(), Ok(30));
        assert_eq!(Cell::from(7.9).as_count(), Ok(7));
        assert_eq!(Cell::from(" 12 ").as_count(), Ok(12));
        assert_eq!(Cell::from("4.0").as_count(), Ok(4));
        assert!(Cell::from("ten").as_count().is_err());
        assert!(Cell::from("1e20").as_count().is_err());
        assert!(Cell::from(1e10).as_count().is_err());
        assert_eq!(Cell::from(MAX_COUNT as f64).as_count(), Ok(MAX_COUNT));
        assert!(Cell::from(-1i64).as_count().is_err());
        assert!(Cell::Empty.as_count().is_err());
    }

    #[test]
    fn test_option_into_cell() {
        let table = Table::new(["a", "b"]).with_row([Some("x"), None]);
        assert!(!table.cell(0, 0).is_empty());
        assert!(table.cell(0, 1).is_empty());
    }
}
