//! User-facing notifications.
//!
//! The planner reports progress to a [`NotificationSink`]. A UI can show
//! these as dialogs; [`TracingSink`] writes them to the log, and
//! `Vec<Notification>` simply collects them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use tracing::{error, info, warn, Level};

use crate::models::{Cohort, OverflowWarning};

/// Something the user should be told about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// A cohort roster was read.
    RosterLoaded { cohort: Cohort, count: usize },
    /// A cohort roster could not be read; its sessions seat nobody.
    RosterUnavailable { cohort: Cohort, reason: String },
    /// A session had more students than seats.
    Overflow(OverflowWarning),
    /// A timetable row was skipped.
    RowSkipped { row: usize, reason: String },
    /// A plan could not be written.
    WriteFailed { path: PathBuf, reason: String },
    /// The run was aborted.
    Fatal { reason: String },
    /// The run finished.
    Completed {
        files_generated: usize,
        output_dir: PathBuf,
    },
}

impl Notification {
    pub fn level(&self) -> Level {
        match self {
            Notification::RosterLoaded { .. } | Notification::Completed { .. } => Level::INFO,
            Notification::Overflow(_) | Notification::RowSkipped { .. } => Level::WARN,
            Notification::RosterUnavailable { .. }
            | Notification::WriteFailed { .. }
            | Notification::Fatal { .. } => Level::ERROR,
        }
    }

    /// Short dialog-style title.
    pub fn title(&self) -> &'static str {
        match self {
            Notification::RosterLoaded { .. } => "Roster Loaded",
            Notification::RosterUnavailable { .. } => "Roster Unavailable",
            Notification::Overflow(_) => "Overflow Warning",
            Notification::RowSkipped { .. } => "Row Skipped",
            Notification::WriteFailed { .. } | Notification::Fatal { .. } => "Error",
            Notification::Completed { .. } => "Process Completed",
        }
    }

    /// Message text.
    pub fn message(&self) -> String {
        match self {
            Notification::RosterLoaded { cohort, count } => {
                format!("Extracted {count} roll numbers for {cohort} year")
            }
            Notification::RosterUnavailable { cohort, reason } => {
                format!("No roster for {cohort} year: {reason}")
            }
            Notification::Overflow(w) => w.to_string(),
            Notification::RowSkipped { row, reason } => format!("Skipped timetable row {row}: {reason}"),
            Notification::WriteFailed { path, reason } => {
                format!("Could not write {}: {reason}", path.display())
            }
            Notification::Fatal { reason } => reason.clone(),
            Notification::Completed {
                files_generated,
                output_dir,
            } => format!(
                "Generated {files_generated} files in {}",
                output_dir.display()
            ),
        }
    }
}

/// Receives notifications in the order they happen.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Forwards notifications to `tracing` at their level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: Notification) {
        let title = notification.title();
        let message = notification.message();
        let level = notification.level();
        if level == Level::ERROR {
            error!(title, "{message}");
        } else if level == Level::WARN {
            warn!(title, "{message}");
        } else {
            info!(title, "{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_and_messages() {
        let n = Notification::Overflow(OverflowWarning {
            exam_codes: vec!["CS401".into()],
            date: "2024-05-10".into(),
            time: "14-00-00".into(),
            count: 4,
        });
        assert_eq!(n.level(), Level::WARN);
        assert_eq!(n.title(), "Overflow Warning");
        assert_eq!(
            n.message(),
            "There are 4 students without seats for exam CS401 on 2024-05-10 at 14-00-00"
        );

        let done = Notification::Completed {
            files_generated: 3,
            output_dir: PathBuf::from("out"),
        };
        assert_eq!(done.level(), Level::INFO);
        assert_eq!(done.message(), "Generated 3 files in out");
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.notify(Notification::Fatal { reason: "a".into() });
        sink.notify(Notification::RowSkipped { row: 1, reason: "b".into() });
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].level(), Level::ERROR);
    }

    #[test]
    fn test_tracing_sink_accepts_everything() {
        let mut sink = TracingSink;
        sink.notify(Notification::RosterLoaded {
            cohort: Cohort::Year2,
            count: 60,
        });
        sink.notify(Notification::Fatal {
            reason: "bad rooms".into(),
        });
    }
}
