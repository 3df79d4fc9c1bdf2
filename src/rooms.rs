//! Room capacity planning.
//!
//! Loads the room table into an ordered [`RoomLayoutSet`] and answers
//! capacity questions about it.
//!
//! Unlike rosters, a bad room table is not degraded quietly: [`try_load`]
//! reports the first schema or cell problem, and the run treats an empty
//! layout as fatal.
//!
//! [`try_load`]: RoomCapacityPlanner::try_load

use tracing::{debug, error};

use crate::error::InputFormatError;
use crate::models::{Room, RoomLayoutSet, SeatPosition};
use crate::table::Table;

/// Required room table columns.
pub const ROOM_COLUMNS: [&str; 4] = ["Room Name", "Total Benches", "Rows", "Benches per Row"];

/// Largest bench grid (`rows × benches_per_row`) a room may declare.
pub const MAX_GRID_CELLS: usize = 1_000_000;

const TABLE: &str = "room";

/// Parses every row of the room table, in input order.
///
/// Duplicate names are kept here; [`RoomLayoutSet`] collapses them.
///
/// A grid larger than [`MAX_GRID_CELLS`] or a capacity sum that does not fit
/// a `usize` is reported as an invalid cell.
pub fn parse_rooms(table: &Table) -> Result<Vec<Room>, InputFormatError> {
    let [name_col, total_col, rows_col, benches_col] = table.require_columns(TABLE, ROOM_COLUMNS)?;

    let count = |row: usize, col: usize, column: &'static str| {
        table
            .cell(row, col)
            .as_count()
            .map_err(|reason| InputFormatError::InvalidCell {
                table: TABLE,
                row,
                column,
                reason,
            })
    };

    let mut total_capacity = 0usize;
    (0..table.row_count())
        .map(|row| -> Result<Room, InputFormatError> {
            let name = table
                .cell(row, name_col)
                .as_text()
                .ok_or_else(|| InputFormatError::InvalidCell {
                    table: TABLE,
                    row,
                    column: ROOM_COLUMNS[0],
                    reason: "is empty".to_string(),
                })?;
            let room = Room::new(
                name,
                count(row, total_col, ROOM_COLUMNS[1])?,
                count(row, rows_col, ROOM_COLUMNS[2])?,
                count(row, benches_col, ROOM_COLUMNS[3])?,
            );
            match room.checked_grid_cells() {
                Some(cells) if cells <= MAX_GRID_CELLS => {}
                _ => {
                    return Err(InputFormatError::InvalidCell {
                        table: TABLE,
                        row,
                        column: ROOM_COLUMNS[3],
                        reason: format!(
                            "gives a grid of {} x {} benches, more than {MAX_GRID_CELLS}",
                            room.rows, room.benches_per_row
                        ),
                    })
                }
            }
            total_capacity = total_capacity
                .checked_add(room.total_capacity)
                .ok_or_else(|| InputFormatError::InvalidCell {
                    table: TABLE,
                    row,
                    column: ROOM_COLUMNS[1],
                    reason: "overflows the total capacity of all rooms".to_string(),
                })?;
            Ok(room)
        })
        .collect()
}

/// The rooms available for a run and their aggregate capacity.
#[derive(Debug, Clone, Default)]
pub struct RoomCapacityPlanner {
    declared: Vec<Room>,
    layout: RoomLayoutSet,
}

impl RoomCapacityPlanner {
    /// Builds a planner from already-parsed rooms.
    pub fn from_rooms(rooms: Vec<Room>) -> Self {
        let layout = rooms.iter().cloned().collect();
        Self {
            declared: rooms,
            layout,
        }
    }

    /// Loads the room table, failing on the first schema or cell error.
    pub fn try_load(table: &Table) -> Result<Self, InputFormatError> {
        let rooms = parse_rooms(table)?;
        debug!(rooms = rooms.len(), "loaded room data");
        Ok(Self::from_rooms(rooms))
    }

    /// Loads the room table; a malformed table yields an empty layout.
    pub fn load(table: &Table) -> Self {
        Self::try_load(table).unwrap_or_else(|e| {
            error!(error = %e, "error loading room data");
            Self::default()
        })
    }

    /// Rooms in fill order, duplicates collapsed.
    pub fn layout(&self) -> &RoomLayoutSet {
        &self.layout
    }

    /// Rooms exactly as they appeared in the table.
    pub fn declared_rooms(&self) -> &[Room] {
        &self.declared
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Sum of every room's declared capacity.
    pub fn total_capacity(&self) -> usize {
        self.layout.total_capacity()
    }

    /// Grid coordinates of a room in fill order.
    pub fn seat_positions(&self, room: &str) -> Vec<SeatPosition> {
        self.layout
            .get(room)
            .map(|r| r.seat_positions().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    fn room_table() -> Table {
        Table::new(ROOM_COLUMNS)
            .with_row([Cell::from("LH-101"), Cell::from(30i64), Cell::from(5i64), Cell::from(6i64)])
            .with_row([Cell::from("LH-102"), Cell::from("20"), Cell::from(4.0), Cell::from("5")])
    }

    #[test]
    fn test_load_rooms_in_order() {
        let planner = RoomCapacityPlanner::try_load(&room_table()).unwrap();
        let names: Vec<&str> = planner.layout().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["LH-101", "LH-102"]);
        assert_eq!(planner.total_capacity(), 50);
        assert_eq!(planner.layout().get("LH-102"), Some(&Room::new("LH-102", 20, 4, 5)));
    }

    #[test]
    fn test_missing_column_is_error() {
        let table = Table::new(["Room Name", "Total Benches", "Rows"]).with_row(["A", "1", "1"]);
        let err = RoomCapacityPlanner::try_load(&table).unwrap_err();
        assert_eq!(
            err,
            InputFormatError::MissingColumn {
                table: "room",
                column: "Benches per Row"
            }
        );
        assert!(RoomCapacityPlanner::load(&table).is_empty());
    }

    #[test]
    fn test_non_numeric_cell_is_error() {
        let table = room_table().with_row(["LH-103", "many", "2", "2"]);
        let err = RoomCapacityPlanner::try_load(&table).unwrap_err();
        assert!(matches!(
            err,
            InputFormatError::InvalidCell { row: 2, column: "Total Benches", .. }
        ));
        let planner = RoomCapacityPlanner::load(&table);
        assert!(planner.is_empty());
        assert_eq!(planner.total_capacity(), 0);
    }

    #[test]
    fn test_huge_capacity_is_rejected() {
        let table = Table::new(ROOM_COLUMNS)
            .with_row(["R1", "1e20", "1", "1"])
            .with_row(["R2", "1e20", "1", "1"]);
        let err = RoomCapacityPlanner::try_load(&table).unwrap_err();
        assert!(matches!(
            err,
            InputFormatError::InvalidCell { row: 0, column: "Total Benches", .. }
        ));
        assert!(RoomCapacityPlanner::load(&table).is_empty());
    }

    #[test]
    fn test_huge_grid_is_rejected() {
        let table = room_table().with_row(["LH-103", "4", "1e9", "1e9"]);
        let err = RoomCapacityPlanner::try_load(&table).unwrap_err();
        assert!(matches!(
            err,
            InputFormatError::InvalidCell { row: 2, column: "Benches per Row", .. }
        ));

        let table = room_table().with_row(["LH-104", "4", "2000", "1000"]);
        assert!(matches!(
            RoomCapacityPlanner::try_load(&table),
            Err(InputFormatError::InvalidCell { row: 2, .. })
        ));

        let table = room_table().with_row(["LH-105", "4", "1000", "1000"]);
        assert!(RoomCapacityPlanner::try_load(&table).is_ok());
    }

    #[test]
    fn test_duplicate_room_replaces_in_place() {
        let table = room_table().with_row([
            Cell::from("LH-101"),
            Cell::from(10i64),
            Cell::from(2i64),
            Cell::from(5i64),
        ]);
        let planner = RoomCapacityPlanner::try_load(&table).unwrap();
        assert_eq!(planner.declared_rooms().len(), 3);
        assert_eq!(planner.layout().len(), 2);
        assert_eq!(planner.total_capacity(), 30);
        assert_eq!(planner.layout().iter().next().map(|r| r.total_capacity), Some(10));
    }

    #[test]
    fn test_seat_positions_lookup() {
        let planner = RoomCapacityPlanner::from_rooms(vec![Room::new("A", 4, 2, 2)]);
        let positions = planner.seat_positions("A");
        assert_eq!(positions.len(), 4);
        assert_eq!(positions[1], SeatPosition { bench: 1, row: 2 });
        assert!(planner.seat_positions("missing").is_empty());
    }
}
