//! Seat allocation.
//!
//! # Algorithm
//!
//! 1. Build one [`PairedSeat`] per bench cell: [`pair`] zips two cohort
//!    rosters index by index, [`single`] gives every student an empty partner.
//! 2. Split the cell list once at the total declared capacity of all rooms
//!    ([`split_at_capacity`]). The prefix is seated; the suffix is overflow.
//! 3. Walk rooms in layout order. Each room takes the next
//!    `total_capacity` cells of the prefix and places them bench by bench
//!    (bench 1 row 1, bench 1 row 2, ..., bench 2 row 1, ...).
//!
//! There is no balancing between rooms: early rooms fill completely before
//! later rooms get anything.
//!
//! A room's grid may hold fewer cells than its declared capacity. Cells
//! allotted to the room beyond the grid are not placed and are not overflow;
//! they are counted in [`RoomFill::unrendered`].

use serde::{Deserialize, Serialize};

use crate::models::{PairedSeat, Room, RoomLayoutSet, SeatGrid, StudentId};

/// Result of splitting an ordered sequence at a capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation<T> {
    /// Seated entries, in input order.
    pub allocated: Vec<T>,
    /// Entries past the capacity, in input order.
    pub overflow: Vec<T>,
}

/// Splits `items` into the first `capacity` entries and the rest.
///
/// Order is preserved; `allocated` followed by `overflow` is the input.
pub fn split_at_capacity<T>(mut items: Vec<T>, capacity: usize) -> Allocation<T> {
    let overflow = if items.len() > capacity {
        items.split_off(capacity)
    } else {
        Vec::new()
    };
    Allocation {
        allocated: items,
        overflow,
    }
}

/// Zips two rosters positionally to the longer length.
///
/// The shorter roster's missing positions become empty slots.
pub fn pair(first: &[StudentId], second: &[StudentId]) -> Vec<PairedSeat> {
    let len = first.len().max(second.len());
    (0..len)
        .map(|i| PairedSeat::new(first.get(i).cloned(), second.get(i).cloned()))
        .collect()
}

/// One seat per student, partner slot empty.
pub fn single(students: &[StudentId]) -> Vec<PairedSeat> {
    students.iter().cloned().map(PairedSeat::solo).collect()
}

/// One room's share of an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomFill {
    pub grid: SeatGrid,
    /// Cells allotted to the room that fall outside its grid.
    pub unrendered: usize,
}

/// A complete seat assignment for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    /// One entry per room, in layout order.
    pub rooms: Vec<RoomFill>,
    pub overflow: Vec<PairedSeat>,
}

impl SeatAssignment {
    /// Cells allotted across all rooms.
    pub fn allocated(&self) -> usize {
        self.rooms
            .iter()
            .map(|r| r.grid.filled() + r.unrendered)
            .sum()
    }
}

/// Lays seats into the rooms of a layout.
#[derive(Debug, Clone, Copy)]
pub struct SeatAllocator<'a> {
    rooms: &'a RoomLayoutSet,
}

impl<'a> SeatAllocator<'a> {
    pub fn new(rooms: &'a RoomLayoutSet) -> Self {
        Self { rooms }
    }

    /// Total declared capacity.
    pub fn capacity(&self) -> usize {
        self.rooms.total_capacity()
    }

    /// Splits `seats` at the total capacity and fills rooms with the prefix.
    pub fn allocate(&self, seats: Vec<PairedSeat>) -> SeatAssignment {
        let Allocation {
            allocated,
            overflow,
        } = split_at_capacity(seats, self.capacity());

        let mut remaining = allocated.into_iter();
        let rooms = self
            .rooms
            .iter()
            .map(|room| {
                let slice: Vec<PairedSeat> = remaining.by_ref().take(room.total_capacity).collect();
                fill_room(room, slice)
            })
            .collect();

        SeatAssignment { rooms, overflow }
    }
}

fn fill_room(room: &Room, slice: Vec<PairedSeat>) -> RoomFill {
    let mut grid = SeatGrid::new(room.rows, room.benches_per_row);
    let total = slice.len();
    let mut placed = 0;
    for (pos, seat) in room.seat_positions().zip(slice) {
        if grid.place(pos, seat) {
            placed += 1;
        }
    }
    RoomFill {
        grid,
        unrendered: total - placed,
    }
}
