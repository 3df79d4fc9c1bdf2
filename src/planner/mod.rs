//! Session planning: timetable rows in, seating plans out.
//!
//! # Algorithm
//!
//! For each timetable row, in order:
//! 1. Classify the row once as a [`SessionKind`].
//! 2. Build the bench cells for the seated cohort(s): paired for a
//!    Year2 + Year3 session, single otherwise.
//! 3. Split at total room capacity and fill rooms in layout order.
//! 4. Pick invigilators room by room from the shared [`FacultyRotator`].
//! 5. Report overflow, then hand the plan to the renderer.
//!
//! Rows are processed strictly one after another. The rotator's used set
//! carries over between rooms and sessions, so the order of rooms and rows
//! decides who invigilates where.
//!
//! # Failure policy
//!
//! Fatal: an unusable room table, or an output directory that cannot be
//! created. Everything else (a missing roster, a bad row, a failed write)
//! is reported and the run continues.

mod config;
mod kpi;
mod notify;
mod render;
mod timetable;

pub use config::PlannerConfig;
pub use kpi::PlanKpi;
pub use notify::{Notification, NotificationSink, TracingSink};
pub use render::{MemoryRenderer, PlanRenderer};
pub use timetable::{read_sessions, TimetableColumns, TIMETABLE_COLUMNS};

use std::path::PathBuf;

use rand::Rng;
use tracing::{debug, error, info, warn};

use crate::allocation::{pair, single, SeatAllocator};
use crate::error::{PlannerError, Result, RowProcessingError};
use crate::faculty::FacultyRotator;
use crate::models::{
    Cohort, ExamSession, FacultyMember, RoomLayoutSet, RoomSection, SeatingPlan, SessionKind,
};
use crate::naming;
use crate::rooms::RoomCapacityPlanner;
use crate::roster::RosterIndex;
use crate::table::Table;
use crate::validation::validate_inputs;

/// Builds one seating plan per timetable session.
#[derive(Debug, Clone, Copy)]
pub struct SessionPlanner<'a> {
    config: &'a PlannerConfig,
    rosters: &'a RosterIndex,
    rooms: &'a RoomLayoutSet,
    faculty: &'a [FacultyMember],
}

impl<'a> SessionPlanner<'a> {
    pub fn new(
        config: &'a PlannerConfig,
        rosters: &'a RosterIndex,
        rooms: &'a RoomLayoutSet,
        faculty: &'a [FacultyMember],
    ) -> Self {
        Self {
            config,
            rosters,
            rooms,
            faculty,
        }
    }

    /// Plans a single session. Returns `None` when no cohort sits an exam.
    pub fn plan_session<R: Rng>(
        &self,
        session: &ExamSession,
        rotator: &mut FacultyRotator<R>,
    ) -> Option<SeatingPlan> {
        let kind = session.kind();
        let seats = match kind {
            SessionKind::None => return None,
            SessionKind::Paired => pair(
                self.rosters.roster(Cohort::Year2),
                self.rosters.roster(Cohort::Year3),
            ),
            SessionKind::Year2Only => single(self.rosters.roster(Cohort::Year2)),
            SessionKind::Year3Only => single(self.rosters.roster(Cohort::Year3)),
            SessionKind::Year4Only => single(self.rosters.roster(Cohort::Year4)),
        };
        let label = match kind {
            SessionKind::Year4Only => &self.config.year4_label,
            _ => &self.config.combined_label,
        };

        let assignment = SeatAllocator::new(self.rooms).allocate(seats);
        let rooms = self
            .rooms
            .iter()
            .zip(assignment.rooms)
            .map(|(room, fill)| RoomSection {
                room: room.clone(),
                invigilators: rotator.select_for_room(self.faculty),
                grid: fill.grid,
                unrendered: fill.unrendered,
            })
            .collect();

        Some(SeatingPlan {
            exam_codes: session.exam_codes(),
            date: session.date.clone(),
            time: session.time.clone(),
            kind,
            label: label.clone(),
            rooms,
            overflow: assignment.overflow,
        })
    }

    /// Walks the timetable, rendering one plan per session.
    ///
    /// Assumes the output directory has been prepared.
    pub fn run<R: Rng>(
        &self,
        timetable: &Table,
        rotator: &mut FacultyRotator<R>,
        renderer: &mut dyn PlanRenderer,
        sink: &mut dyn NotificationSink,
    ) -> RunReport {
        let mut report = RunReport::new(self.config.output_dir.clone());

        let sessions = match read_sessions(timetable) {
            Ok(sessions) => sessions,
            Err(e) => {
                error!(error = %e, "error reading timetable");
                sink.notify(Notification::Fatal {
                    reason: e.to_string(),
                });
                return self.finish(report, sink);
            }
        };
        info!(rows = sessions.len(), "loaded timetable");

        for parsed in sessions {
            let session = match parsed {
                Ok(session) => session,
                Err(e) => {
                    warn!(error = %e, "skipping timetable row");
                    sink.notify(Notification::RowSkipped {
                        row: row_of(&e),
                        reason: e.to_string(),
                    });
                    report.skipped_rows.push(e);
                    continue;
                }
            };

            let Some(plan) = self.plan_session(&session, rotator) else {
                debug!(row = session.row, "no exam scheduled, skipping row");
                continue;
            };

            let path = naming::output_path(
                &self.config.output_dir,
                &plan.exam_codes,
                &plan.date,
                &plan.time,
                &self.config.file_extension,
            );
            // Overflow is a property of the plan, reported whether or not it is saved.
            if let Some(warning) = plan.overflow_warning() {
                warn!(
                    count = warning.count,
                    exams = %warning.exam_codes.join(", "),
                    date = %warning.date,
                    time = %warning.time,
                    "overflow of students"
                );
                sink.notify(Notification::Overflow(warning));
            }

            if let Err(e) = renderer.render(&path, &plan) {
                error!(error = %e, "failed to write seating plan");
                sink.notify(Notification::WriteFailed {
                    path: path.clone(),
                    reason: e.source.to_string(),
                });
                report.failed_writes.push(path);
                continue;
            }
            info!(path = %path.display(), "saved seating plan");
            report.record(path, &plan);
        }

        self.finish(report, sink)
    }

    fn finish(&self, report: RunReport, sink: &mut dyn NotificationSink) -> RunReport {
        info!(files = report.files_generated(), "generated files in total");
        sink.notify(Notification::Completed {
            files_generated: report.files_generated(),
            output_dir: report.output_dir.clone(),
        });
        report
    }
}

fn row_of(e: &RowProcessingError) -> usize {
    match e {
        RowProcessingError::MissingField { row, .. } | RowProcessingError::InvalidField { row, .. } => *row,
    }
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_dir: PathBuf,
    /// Written files, in timetable order.
    pub files: Vec<PathBuf>,
    /// Indicators for each written plan, parallel to `files`.
    pub kpis: Vec<PlanKpi>,
    pub skipped_rows: Vec<RowProcessingError>,
    pub failed_writes: Vec<PathBuf>,
}

impl RunReport {
    fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            files: Vec::new(),
            kpis: Vec::new(),
            skipped_rows: Vec::new(),
            failed_writes: Vec::new(),
        }
    }

    fn record(&mut self, path: PathBuf, plan: &SeatingPlan) {
        self.files.push(path);
        self.kpis.push(PlanKpi::calculate(plan));
    }

    pub fn files_generated(&self) -> usize {
        self.files.len()
    }

    /// Overflow entries summed over every written plan.
    pub fn total_overflow(&self) -> usize {
        self.kpis.iter().map(|k| k.overflow).sum()
    }
}

/// The tables of one run.
#[derive(Debug, Clone, Default)]
pub struct RunInputs {
    pub timetable: Table,
    /// Student table per cohort; a missing entry seats nobody.
    pub students: Vec<(Cohort, Table)>,
    pub rooms: Table,
    /// Invigilators chosen for this run.
    pub faculty: Vec<FacultyMember>,
}

impl RunInputs {
    fn students(&self, cohort: Cohort) -> Option<&Table> {
        self.students
            .iter()
            .find(|(c, _)| *c == cohort)
            .map(|(_, t)| t)
    }
}

/// Runs a complete seating generation.
///
/// Prepares the output directory, loads rosters and rooms, reports
/// validation findings, then plans every timetable row.
pub fn generate_seating_plans<R: Rng>(
    inputs: &RunInputs,
    config: &PlannerConfig,
    rotator: &mut FacultyRotator<R>,
    renderer: &mut dyn PlanRenderer,
    sink: &mut dyn NotificationSink,
) -> Result<RunReport> {
    if let Err(source) = renderer.prepare(&config.output_dir) {
        let err = PlannerError::OutputDirectory {
            path: config.output_dir.clone(),
            source,
        };
        error!(error = %err, "cannot prepare output directory");
        sink.notify(Notification::Fatal {
            reason: err.to_string(),
        });
        return Err(err);
    }

    let mut rosters = RosterIndex::new();
    for cohort in Cohort::ALL {
        match rosters.load(cohort, inputs.students(cohort)) {
            Ok(count) => sink.notify(Notification::RosterLoaded { cohort, count }),
            Err(e) => sink.notify(Notification::RosterUnavailable {
                cohort,
                reason: e.to_string(),
            }),
        }
    }

    let rooms = match RoomCapacityPlanner::try_load(&inputs.rooms) {
        Ok(planner) if planner.is_empty() => Err(PlannerError::NoRooms),
        Ok(planner) => Ok(planner),
        Err(e) => Err(PlannerError::RoomTable(e)),
    };
    let rooms = match rooms {
        Ok(rooms) => rooms,
        Err(err) => {
            error!(error = %err, "failed to load room data");
            sink.notify(Notification::Fatal {
                reason: format!("Failed to load room data. Please check the room file format. ({err})"),
            });
            return Err(err);
        }
    };
    info!(
        rooms = rooms.layout().len(),
        capacity = rooms.total_capacity(),
        "loaded room data"
    );

    if let Err(findings) = validate_inputs(
        rooms.declared_rooms(),
        &rosters,
        &inputs.faculty,
        rotator.per_room(),
    ) {
        for finding in findings {
            warn!(kind = ?finding.kind, "{}", finding.message);
        }
    }

    let planner = SessionPlanner::new(config, &rosters, rooms.layout(), &inputs.faculty);
    Ok(planner.run(&inputs.timetable, rotator, renderer, sink))
}
