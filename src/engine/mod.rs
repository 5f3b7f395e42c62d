//! Timetable engine and candidate navigation.
//!
//! `TimetableEngine` runs the whole pipeline on a list of session records:
//! validation, grouping, conflict analysis, and the maximum-set search. It
//! returns a `TimetableOutcome` holding every maximum schedule, the course
//! groups needed to display them, and the records that were dropped.
//!
//! `CandidateCursor` steps through the candidates of an outcome.
//!
//! # Concurrency
//!
//! A run is synchronous and holds no shared state. It has no internal
//! cancellation points; callers wanting responsiveness should move the
//! whole run to a worker thread (all inputs and outputs are `Send`).

mod cursor;
mod timetable;

pub use cursor::CandidateCursor;
pub use timetable::{TimetableEngine, TimetableOutcome, TimetableRequest};
