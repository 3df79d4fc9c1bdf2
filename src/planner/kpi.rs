//! Seating plan metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Allocated | Cells allotted to rooms (rendered or not) |
//! | Students seated | Students in rendered cells (a paired cell counts twice) |
//! | Overflow | Entries past total declared capacity |
//! | Unrendered | Allotted cells that did not fit a room's grid |
//! | Utilization | Allotted cells / declared capacity, per room |
//! | Fill rate | Allotted cells / total declared capacity |

use serde::{Deserialize, Serialize};

use crate::models::SeatingPlan;

/// Per-plan indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanKpi {
    pub exam_codes: Vec<String>,
    pub allocated: usize,
    pub students_seated: usize,
    pub overflow: usize,
    pub unrendered: usize,
    /// Room name and utilization (0.0..=1.0), in layout order.
    pub utilization_by_room: Vec<(String, f64)>,
    /// Fraction of total declared capacity in use (0.0..=1.0).
    pub fill_rate: f64,
}

impl PlanKpi {
    /// Computes indicators for a plan.
    pub fn calculate(plan: &SeatingPlan) -> Self {
        let mut capacity = 0usize;
        let mut utilization_by_room = Vec::with_capacity(plan.rooms.len());
        for section in &plan.rooms {
            capacity += section.room.total_capacity;
            let util = if section.room.total_capacity == 0 {
                0.0
            } else {
                section.allotted() as f64 / section.room.total_capacity as f64
            };
            utilization_by_room.push((section.room.name.clone(), util));
        }

        let allocated = plan.allocated();
        let fill_rate = if capacity == 0 {
            0.0
        } else {
            allocated as f64 / capacity as f64
        };

        Self {
            exam_codes: plan.exam_codes.clone(),
            allocated,
            students_seated: plan.rooms.iter().map(|s| s.grid.students()).sum(),
            overflow: plan.overflow_count(),
            unrendered: plan.rooms.iter().map(|s| s.unrendered).sum(),
            utilization_by_room,
            fill_rate,
        }
    }

    /// Whether every entry got a seat.
    pub fn fully_seated(&self) -> bool {
        self.overflow == 0
    }
}
