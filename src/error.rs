//! Error types for the seating engine.
//!
//! Input and row errors are recoverable: the planner logs them and keeps
//! going. Only [`PlannerError`] aborts a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A table did not match the schema expected at a loading boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputFormatError {
    /// The table was not supplied at all.
    #[error("{table} table was not provided")]
    MissingTable { table: &'static str },
    /// A required column header is absent.
    #[error("{table} table is missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
    /// A cell could not be coerced to the expected type.
    #[error("{table} table row {row}: column '{column}' {reason}")]
    InvalidCell {
        table: &'static str,
        row: usize,
        column: &'static str,
        reason: String,
    },
}

/// A single timetable row could not be turned into a session.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RowProcessingError {
    #[error("timetable row {row}: '{column}' is empty")]
    MissingField { row: usize, column: &'static str },
    #[error("timetable row {row}: '{column}' {reason}")]
    InvalidField {
        row: usize,
        column: &'static str,
        reason: String,
    },
}

/// The renderer could not persist a plan.
#[derive(Debug, Error)]
#[error("failed to write seating plan to {}: {source}", .path.display())]
pub struct OutputWriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Run-fatal failures.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("failed to load room data: {0}")]
    RoomTable(#[from] InputFormatError),
    #[error("room table contains no rooms")]
    NoRooms,
    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result alias for run-level operations.
pub type Result<T> = std::result::Result<T, PlannerError>;
