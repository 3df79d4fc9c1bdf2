//! Input validation for a seating run.
//!
//! Checks the loaded inputs for problems that do not stop a run but
//! usually mean the source tables are wrong:
//! - Duplicate room names (the later row replaces the earlier one)
//! - Duplicate student ids inside one cohort roster
//! - Duplicate faculty members
//! - Rooms with zero declared capacity
//! - Rooms whose bench grid cannot show every declared seat
//! - Too few invigilators to staff a room without reuse

use std::collections::HashSet;

use crate::models::{FacultyMember, Room};
use crate::roster::RosterIndex;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two rooms share a name.
    DuplicateRoom,
    /// A student id appears twice in one roster.
    DuplicateStudent,
    /// A faculty member is listed twice.
    DuplicateFaculty,
    /// A room declares no seats.
    ZeroCapacity,
    /// `rows × benches_per_row` is smaller than the declared capacity.
    GridSmallerThanCapacity,
    /// The pool cannot fill one room without reuse.
    InsufficientFaculty,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of a seating run.
///
/// `rooms` are the rooms as declared in the table, before duplicates are
/// collapsed.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(findings)` with every issue detected.
pub fn validate_inputs(
    rooms: &[Room],
    rosters: &RosterIndex,
    faculty: &[FacultyMember],
    invigilators_per_room: usize,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut room_names = HashSet::new();
    for room in rooms {
        if !room_names.insert(room.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRoom,
                format!("Duplicate room name: {}", room.name),
            ));
        }
        if room.total_capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Room '{}' declares no seats", room.name),
            ));
        } else if !room.grid_covers_capacity() {
            errors.push(ValidationError::new(
                ValidationErrorKind::GridSmallerThanCapacity,
                format!(
                    "Room '{}' declares {} seats but its grid has {} cells",
                    room.name,
                    room.total_capacity,
                    room.grid_cells()
                ),
            ));
        }
    }

    for (cohort, roster) in rosters.iter() {
        let mut seen = HashSet::new();
        for id in roster {
            if !seen.insert(id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateStudent,
                    format!("Duplicate student ID in {cohort} year roster: {id}"),
                ));
            }
        }
    }

    let mut members = HashSet::new();
    for member in faculty {
        if !members.insert(member) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateFaculty,
                format!("Duplicate faculty member: {member}"),
            ));
        }
    }
    if members.len() < invigilators_per_room {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientFaculty,
            format!(
                "{} faculty member(s) available, {} needed per room",
                members.len(),
                invigilators_per_room
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
