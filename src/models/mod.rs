//! Seating domain models.
//!
//! Plain data types shared by the loaders, the allocator and the planner.
//!
//! # Domain Mappings
//!
//! | exam-seating | Meaning |
//! |--------------|---------|
//! | StudentId | Enrollment number from a cohort roster |
//! | Cohort | Academic year group (II, III, IV) |
//! | PairedSeat | One bench cell, up to two students |
//! | Room | Exam hall with declared capacity and bench grid |
//! | FacultyMember | Invigilator |
//! | ExamSession | One timetable row |
//! | SeatingPlan | Per-session output handed to the renderer |

mod faculty;
mod plan;
mod room;
mod session;
mod student;

pub use faculty::FacultyMember;
pub use plan::{OverflowWarning, RoomSection, SeatGrid, SeatingPlan};
pub use room::{Room, RoomLayoutSet, SeatPosition};
pub use session::{ExamSession, SessionKind};
pub use student::{Cohort, PairedSeat, StudentId};
