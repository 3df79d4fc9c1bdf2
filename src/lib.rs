//! Exam seating allocation engine.
//!
//! Turns a timetable, cohort rosters, an invigilator pool and room layouts
//! into one seating plan per exam session. Reading spreadsheets and
//! rendering styled documents are left to the caller; this crate works on
//! in-memory [`table::Table`]s and produces [`models::SeatingPlan`]s.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `StudentId`, `Cohort`, `PairedSeat`, `Room`,
//!   `RoomLayoutSet`, `FacultyMember`, `ExamSession`, `SeatingPlan`
//! - **`table`**: In-memory tabular input and validated column lookup
//! - **`roster`**: Cohort rosters (`RosterIndex`)
//! - **`rooms`**: Room table loading and capacity (`RoomCapacityPlanner`)
//! - **`faculty`**: Invigilator extraction and rotation (`FacultyRotator`)
//! - **`allocation`**: Capacity split, cohort pairing, room filling (`SeatAllocator`)
//! - **`planner`**: Per-session planning, notifications, run driver (`SessionPlanner`)
//! - **`naming`**: Output file naming
//! - **`validation`**: Input integrity checks (duplicates, capacity/grid mismatch)
//!
//! # Example
//!
//! ```
//! use exam_seating::models::{Cohort, ExamSession, FacultyMember, Room, RoomLayoutSet};
//! use exam_seating::faculty::FacultyRotator;
//! use exam_seating::planner::{PlannerConfig, SessionPlanner};
//! use exam_seating::roster::RosterIndex;
//!
//! let config = PlannerConfig::new("out");
//! let rosters = RosterIndex::new()
//!     .with_roster(Cohort::Year2, ["S1", "S2", "S3"])
//!     .with_roster(Cohort::Year3, ["T1", "T2"]);
//! let rooms: RoomLayoutSet = vec![Room::new("LH-101", 4, 2, 2)].into_iter().collect();
//! let faculty = vec![FacultyMember::new("F1", "Asha"), FacultyMember::new("F2", "Ravi")];
//!
//! let planner = SessionPlanner::new(&config, &rosters, &rooms, &faculty);
//! let mut rotator = FacultyRotator::seeded(42);
//! let session = ExamSession::new(0, "2024-05-10", "09-00-00")
//!     .with_code(Cohort::Year2, "CS201")
//!     .with_code(Cohort::Year3, "CS301");
//!
//! let plan = planner.plan_session(&session, &mut rotator).unwrap();
//! assert_eq!(plan.allocated(), 3);
//! assert!(plan.overflow.is_empty());
//! ```

pub mod allocation;
pub mod error;
pub mod faculty;
pub mod models;
pub mod naming;
pub mod planner;
pub mod rooms;
pub mod roster;
pub mod table;
pub mod validation;
