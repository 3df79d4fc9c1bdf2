//! Run configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::faculty::{FacultyRotator, DEFAULT_PER_ROOM};

/// Settings for one seating run.
///
/// Every field has a default, so a partial document deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Directory receiving one file per session.
    pub output_dir: PathBuf,
    /// Extension of generated files.
    pub file_extension: String,
    /// Invigilators assigned to each room.
    pub invigilators_per_room: usize,
    /// Seed for invigilator selection. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Room label for Year4 sessions.
    pub year4_label: String,
    /// Room label for every other session.
    pub combined_label: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("seating"),
            file_extension: "xlsx".to_string(),
            invigilators_per_room: DEFAULT_PER_ROOM,
            seed: None,
            year4_label: "4th Year".to_string(),
            combined_label: "Combined 2nd and 3rd Year".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Creates a config writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Sets the generated file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }

    /// Sets invigilators per room.
    pub fn with_invigilators_per_room(mut self, count: usize) -> Self {
        self.invigilators_per_room = count;
        self
    }

    /// Fixes the invigilator selection seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the run's rotator from these settings.
    pub fn rotator(&self) -> FacultyRotator {
        let rotator = match self.seed {
            Some(seed) => FacultyRotator::seeded(seed),
            None => FacultyRotator::from_os_rng(),
        };
        rotator.with_per_room(self.invigilators_per_room)
    }
}
