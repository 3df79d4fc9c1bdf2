//! Room model.
//!
//! A room has a declared seat capacity and an independent bench grid.
//! Allocation math uses `total_capacity`; rendering uses
//! `rows × benches_per_row`. The two are not required to agree.

use serde::{Deserialize, Serialize};

/// An exam room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room name.
    pub name: String,
    /// Declared number of seats used for allocation.
    pub total_capacity: usize,
    /// Number of bench columns ("Row 1".."Row R" in the rendered grid).
    pub rows: usize,
    /// Benches in each row.
    pub benches_per_row: usize,
}

/// A 1-based grid coordinate inside a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPosition {
    pub bench: usize,
    pub row: usize,
}

impl Room {
    /// Creates a room whose grid is `rows × benches_per_row`.
    pub fn new(
        name: impl Into<String>,
        total_capacity: usize,
        rows: usize,
        benches_per_row: usize,
    ) -> Self {
        Self {
            name: name.into(),
            total_capacity,
            rows,
            benches_per_row,
        }
    }

    /// Number of renderable grid cells, `None` if it does not fit a `usize`.
    #[inline]
    pub fn checked_grid_cells(&self) -> Option<usize> {
        self.rows.checked_mul(self.benches_per_row)
    }

    /// Number of renderable grid cells, saturating at `usize::MAX`.
    #[inline]
    pub fn grid_cells(&self) -> usize {
        self.rows.saturating_mul(self.benches_per_row)
    }

    /// Whether the grid can render every declared seat.
    pub fn grid_covers_capacity(&self) -> bool {
        self.grid_cells() >= self.total_capacity
    }

    /// Grid coordinates in fill order: bench 1 across every row, then bench 2.
    pub fn seat_positions(&self) -> impl Iterator<Item = SeatPosition> + '_ {
        (1..=self.benches_per_row)
            .flat_map(move |bench| (1..=self.rows).map(move |row| SeatPosition { bench, row }))
    }
}

/// Rooms in input order.
///
/// Iteration order is the room fill order and the invigilator assignment
/// order. Inserting a name that already exists replaces that room in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomLayoutSet {
    rooms: Vec<Room>,
}

impl RoomLayoutSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a room, returning the room it replaced.
    pub fn insert(&mut self, room: Room) -> Option<Room> {
        match self.rooms.iter_mut().find(|r| r.name == room.name) {
            Some(existing) => Some(std::mem::replace(existing, room)),
            None => {
                self.rooms.push(room);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Sum of declared capacities, saturating at `usize::MAX`.
    pub fn total_capacity(&self) -> usize {
        self.rooms
            .iter()
            .fold(0usize, |acc, r| acc.saturating_add(r.total_capacity))
    }
}

impl FromIterator<Room> for RoomLayoutSet {
    fn from_iter<I: IntoIterator<Item = Room>>(iter: I) -> Self {
        let mut set = Self::new();
        for room in iter {
            set.insert(room);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RoomLayoutSet {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_positions_bench_major() {
        let room = Room::new("A", 6, 3, 2);
        let order: Vec<(usize, usize)> = room.seat_positions().map(|p| (p.bench, p.row)).collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_grid_independent_of_capacity() {
        let room = Room::new("B", 10, 2, 3);
        assert_eq!(room.grid_cells(), 6);
        assert!(!room.grid_covers_capacity());
        assert!(Room::new("C", 4, 2, 2).grid_covers_capacity());
    }

    #[test]
    fn test_layout_set_keeps_order_and_replaces_in_place() {
        let mut set: RoomLayoutSet = vec![
            Room::new("R1", 4, 2, 2),
            Room::new("R2", 3, 3, 1),
            Room::new("R3", 5, 5, 1),
        ]
        .into_iter()
        .collect();

        let replaced = set.insert(Room::new("R2", 8, 4, 2));
        assert_eq!(replaced.map(|r| r.total_capacity), Some(3));

        let names: Vec<&str> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["R1", "R2", "R3"]);
        assert_eq!(set.total_capacity(), 4 + 8 + 5);
        assert_eq!(set.get("R2").map(|r| r.rows), Some(4));
    }

    #[test]
    fn test_huge_values_saturate() {
        let room = Room::new("H", usize::MAX, usize::MAX, 2);
        assert_eq!(room.checked_grid_cells(), None);
        assert_eq!(room.grid_cells(), usize::MAX);

        let set: RoomLayoutSet = vec![room, Room::new("I", 5, 1, 5)].into_iter().collect();
        assert_eq!(set.total_capacity(), usize::MAX);
    }

    #[test]
    fn test_empty_layout_set() {
        let set = RoomLayoutSet::new();
        assert!(set.is_empty());
        assert_eq!(set.total_capacity(), 0);
    }
}
