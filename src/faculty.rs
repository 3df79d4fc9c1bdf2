//! Invigilator pool and rotation.
//!
//! # Algorithm
//!
//! For each room, candidates are the pool members not yet used in this run.
//! If fewer than `per_room` candidates remain, the whole pool is used for
//! that one call; the used set is *not* cleared, so the next call falls back
//! again until the run ends. From the candidates, `min(per_room, |candidates|)`
//! members are sampled uniformly without replacement and marked as used.
//!
//! The rotator is the only mutable state of a run. It is created once and
//! passed by `&mut` through every room of every session.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::error::InputFormatError;
use crate::models::FacultyMember;
use crate::table::Table;

/// Required faculty table columns.
pub const FACULTY_COLUMNS: [&str; 2] = ["FacultyID", "Name"];

/// Default number of invigilators per room.
pub const DEFAULT_PER_ROOM: usize = 2;

const TABLE: &str = "faculty";

/// Extracts faculty members from the faculty table.
///
/// Rows missing either field are dropped. Duplicates are kept so they can be
/// reported; the rotator never picks the same member twice in one call.
pub fn extract_faculty(table: &Table) -> Result<Vec<FacultyMember>, InputFormatError> {
    let [id_col, name_col] = table.require_columns(TABLE, FACULTY_COLUMNS)?;
    Ok((0..table.row_count())
        .filter_map(|row| {
            let id = table.cell(row, id_col).as_text()?;
            let name = table.cell(row, name_col).as_text()?;
            Some(FacultyMember::new(id, name))
        })
        .collect())
}

/// Rotates invigilators across rooms with minimal repetition.
#[derive(Debug, Clone)]
pub struct FacultyRotator<R = StdRng> {
    rng: R,
    used: HashSet<FacultyMember>,
    per_room: usize,
}

impl FacultyRotator<StdRng> {
    /// A rotator with a reproducible random stream.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A rotator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> FacultyRotator<R> {
    /// Creates a rotator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            used: HashSet::new(),
            per_room: DEFAULT_PER_ROOM,
        }
    }

    /// Sets the number of invigilators per room.
    pub fn with_per_room(mut self, per_room: usize) -> Self {
        self.per_room = per_room;
        self
    }

    pub fn per_room(&self) -> usize {
        self.per_room
    }

    /// Members handed out so far in this run.
    pub fn used(&self) -> &HashSet<FacultyMember> {
        &self.used
    }

    /// Pool members that have not been handed out yet.
    pub fn available<'p>(&self, pool: &'p [FacultyMember]) -> Vec<&'p FacultyMember> {
        distinct(pool)
            .into_iter()
            .filter(|m| !self.used.contains(*m))
            .collect()
    }

    /// Selects the invigilators for one room.
    ///
    /// Returns `min(per_room, |candidates|)` distinct members, where the
    /// candidates are the unused members, or the whole pool when fewer than
    /// `per_room` are unused.
    pub fn select_for_room(&mut self, pool: &[FacultyMember]) -> Vec<FacultyMember> {
        let mut candidates = self.available(pool);
        if candidates.len() < self.per_room {
            trace!(
                available = candidates.len(),
                pool = pool.len(),
                "rotation pool exhausted, drawing from full pool"
            );
            candidates = distinct(pool);
        }

        let amount = self.per_room.min(candidates.len());
        let chosen: Vec<FacultyMember> = candidates
            .choose_multiple(&mut self.rng, amount)
            .map(|m| (*m).clone())
            .collect();

        self.used.extend(chosen.iter().cloned());
        debug!(
            selected = ?chosen.iter().map(ToString::to_string).collect::<Vec<_>>(),
            used = self.used.len(),
            "selected invigilators"
        );
        chosen
    }
}

/// Pool members with repeats removed, first occurrence wins.
fn distinct(pool: &[FacultyMember]) -> Vec<&FacultyMember> {
    let mut seen = HashSet::new();
    pool.iter().filter(|m| seen.insert(*m)).collect()
}
