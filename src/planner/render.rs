//! Hand-off to the document renderer.
//!
//! Producing a styled spreadsheet is the renderer's job. The planner only
//! tells it where each plan goes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::OutputWriteError;
use crate::models::SeatingPlan;

/// Writes seating plans somewhere.
pub trait PlanRenderer {
    /// Prepares the output directory before any plan is written.
    ///
    /// The default creates it (and its parents) on disk.
    fn prepare(&mut self, output_dir: &Path) -> io::Result<()> {
        fs::create_dir_all(output_dir)
    }

    /// Writes one plan to `path`.
    fn render(&mut self, path: &Path, plan: &SeatingPlan) -> Result<(), OutputWriteError>;
}

/// Keeps rendered plans in memory, keyed by their output path.
///
/// Useful for previews and for callers that render on their own.
#[derive(Debug, Clone, Default)]
pub struct MemoryRenderer {
    pub plans: Vec<(PathBuf, SeatingPlan)>,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output paths in render order.
    pub fn paths(&self) -> Vec<&Path> {
        self.plans.iter().map(|(p, _)| p.as_path()).collect()
    }
}

impl PlanRenderer for MemoryRenderer {
    fn prepare(&mut self, _output_dir: &Path) -> io::Result<()> {
        Ok(())
    }

    fn render(&mut self, path: &Path, plan: &SeatingPlan) -> Result<(), OutputWriteError> {
        self.plans.push((path.to_path_buf(), plan.clone()));
        Ok(())
    }
}
