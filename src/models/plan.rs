//! Seating plan (per-session output) model.
//!
//! A [`SeatingPlan`] is everything the document renderer needs for one
//! session: header lines, one section per room with its invigilators and
//! bench grid, and the entries that did not get a seat.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{FacultyMember, PairedSeat, Room, SeatPosition, SessionKind};

/// Bench grid of a single room.
///
/// Cells are stored in fill order (bench 1 across all rows, then bench 2).
/// `None` is a blank cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatGrid {
    pub rows: usize,
    pub benches_per_row: usize,
    cells: Vec<Option<PairedSeat>>,
}

impl SeatGrid {
    /// Creates a blank grid.
    ///
    /// A grid whose cell count overflows `usize` is created without cells,
    /// so nothing can be placed in it. The room loader rejects such rooms.
    pub fn new(rows: usize, benches_per_row: usize) -> Self {
        let cells = rows
            .checked_mul(benches_per_row)
            .map(|n| vec![None; n])
            .unwrap_or_default();
        Self {
            rows,
            benches_per_row,
            cells,
        }
    }

    fn offset(&self, pos: SeatPosition) -> Option<usize> {
        let in_range = (1..=self.benches_per_row).contains(&pos.bench)
            && (1..=self.rows).contains(&pos.row);
        if !in_range {
            return None;
        }
        (pos.bench - 1)
            .checked_mul(self.rows)?
            .checked_add(pos.row - 1)
            .filter(|&i| i < self.cells.len())
    }

    /// Places a seat. Returns `false` if the position is outside the grid.
    pub fn place(&mut self, pos: SeatPosition, seat: PairedSeat) -> bool {
        match self.offset(pos) {
            Some(i) => {
                self.cells[i] = Some(seat);
                true
            }
            None => false,
        }
    }

    /// Seat at a 1-based position.
    pub fn get(&self, bench: usize, row: usize) -> Option<&PairedSeat> {
        self.offset(SeatPosition { bench, row })
            .and_then(|i| self.cells[i].as_ref())
    }

    /// Number of non-blank cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of students seated (a paired cell counts twice).
    pub fn students(&self) -> usize {
        self.cells.iter().flatten().map(PairedSeat::occupants).sum()
    }

    /// Column headers: `Row 1` .. `Row R`.
    pub fn column_headers(&self) -> Vec<String> {
        (1..=self.rows).map(|r| format!("Row {r}")).collect()
    }

    /// Rendered grid, one line per bench: `Bench n` followed by cell text.
    pub fn render(&self) -> Vec<Vec<String>> {
        (1..=self.benches_per_row)
            .map(|bench| {
                let mut line = Vec::with_capacity(self.rows + 1);
                line.push(format!("Bench {bench}"));
                line.extend((1..=self.rows).map(|row| {
                    self.get(bench, row)
                        .map(PairedSeat::render)
                        .unwrap_or_default()
                }));
                line
            })
            .collect()
    }
}

/// One room's part of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSection {
    pub room: Room,
    /// Invigilators assigned to this room for this session.
    pub invigilators: Vec<FacultyMember>,
    pub grid: SeatGrid,
    /// Entries allotted to this room by capacity that the grid could not show.
    pub unrendered: usize,
}

impl RoomSection {
    /// Section title, e.g. `"LH-101 Seating Arrangement"`.
    pub fn title(&self) -> String {
        format!("{} Seating Arrangement", self.room.name)
    }

    /// Number of cells allotted to this room (rendered or not).
    pub fn allotted(&self) -> usize {
        self.grid.filled() + self.unrendered
    }
}

/// The seating plan for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingPlan {
    pub exam_codes: Vec<String>,
    pub date: String,
    pub time: String,
    pub kind: SessionKind,
    /// Room category label shown in the header.
    pub label: String,
    pub rooms: Vec<RoomSection>,
    /// Entries that exceeded total room capacity, in roster order.
    pub overflow: Vec<PairedSeat>,
}

impl SeatingPlan {
    /// Header block lines.
    pub fn header_lines(&self) -> [String; 4] {
        [
            format!("Exam Codes: {}", self.exam_codes.join(", ")),
            format!("Date: {}", self.date),
            format!("Time: {}", self.time),
            format!("Room: {}", self.label),
        ]
    }

    /// Number of cells allotted across all rooms.
    pub fn allocated(&self) -> usize {
        self.rooms.iter().map(RoomSection::allotted).sum()
    }

    pub fn overflow_count(&self) -> usize {
        self.overflow.len()
    }

    /// Overflow warning for this plan, if anything overflowed.
    pub fn overflow_warning(&self) -> Option<OverflowWarning> {
        (!self.overflow.is_empty()).then(|| OverflowWarning {
            exam_codes: self.exam_codes.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            count: self.overflow.len(),
        })
    }
}

/// Capacity was exceeded for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverflowWarning {
    pub exam_codes: Vec<String>,
    pub date: String,
    pub time: String,
    /// Number of unseated entries.
    pub count: usize,
}

impl fmt::Display for OverflowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "There are {} students without seats for exam {} on {} at {}",
            self.count,
            self.exam_codes.join(", "),
            self.date,
            self.time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(a: &str, b: Option<&str>) -> PairedSeat {
        PairedSeat::new(Some(a.into()), b.map(Into::into))
    }

    #[test]
    fn test_grid_place_and_render() {
        let mut grid = SeatGrid::new(2, 2);
        assert!(grid.place(SeatPosition { bench: 1, row: 1 }, seat("S1", Some("T1"))));
        assert!(grid.place(SeatPosition { bench: 1, row: 2 }, seat("S2", None)));
        assert!(!grid.place(SeatPosition { bench: 3, row: 1 }, seat("X", None)));

        assert_eq!(grid.filled(), 2);
        assert_eq!(grid.students(), 3);
        assert_eq!(grid.column_headers(), vec!["Row 1", "Row 2"]);
        assert_eq!(
            grid.render(),
            vec![
                vec!["Bench 1".to_string(), "S1\nT1".to_string(), "S2".to_string()],
                vec!["Bench 2".to_string(), String::new(), String::new()],
            ]
        );
    }

    #[test]
    fn test_oversized_grid_holds_nothing() {
        let mut grid = SeatGrid::new(usize::MAX, 2);
        assert!(!grid.place(SeatPosition { bench: 1, row: 1 }, PairedSeat::solo("S1".into())));
        assert!(grid.get(2, usize::MAX).is_none());
        assert_eq!(grid.filled(), 0);
    }

    #[test]
    fn test_header_and_warning() {
        let plan = SeatingPlan {
            exam_codes: vec!["CS201".into(), "CS301".into()],
            date: "2024-05-10".into(),
            time: "09-00-00".into(),
            kind: SessionKind::Paired,
            label: "Combined 2nd and 3rd Year".into(),
            rooms: Vec::new(),
            overflow: vec![seat("S9", None), seat("S10", None)],
        };

        assert_eq!(plan.header_lines()[0], "Exam Codes: CS201, CS301");
        assert_eq!(plan.header_lines()[3], "Room: Combined 2nd and 3rd Year");

        let warning = plan.overflow_warning().unwrap();
        assert_eq!(warning.count, 2);
        assert_eq!(
            warning.to_string(),
            "There are 2 students without seats for exam CS201, CS301 on 2024-05-10 at 09-00-00"
        );
    }

    #[test]
    fn test_no_warning_without_overflow() {
        let plan = SeatingPlan {
            exam_codes: vec!["CS401".into()],
            date: "d".into(),
            time: "t".into(),
            kind: SessionKind::Year4Only,
            label: "4th Year".into(),
            rooms: Vec::new(),
            overflow: Vec::new(),
        };
        assert!(plan.overflow_warning().is_none());
    }
}
