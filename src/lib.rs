//! Timetable combination engine.
//!
//! Given the sessions of the courses in a cart, finds every largest set of
//! course codes whose sessions never overlap, and explains for each set
//! which left-out courses clash with which kept ones.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `SessionRecord`, `Session`, `Weekday`,
//!   `TimeOfDay`, `CourseGroups`, `ScheduleCandidate`
//! - **`validation`**: Record checks (course code, day, times, interval)
//! - **`conflict`**: Grouping by course code and the pairwise `ConflictMatrix`
//! - **`search`**: Exhaustive maximum conflict-free set search
//! - **`engine`**: `TimetableEngine` pipeline and `CandidateCursor`
//!
//! # Architecture
//!
//! Data flows one way: records → validation → conflict analysis → search
//! → caller. The crate performs no I/O and keeps no state between runs.
//! Storage, search-by-text, file import, and rendering belong to callers.
//!
//! # References
//!
//! - Tarjan & Trojanowski (1977), "Finding a Maximum Independent Set"
//! - Garey & Johnson (1979), "Computers and Intractability", GT20

pub mod conflict;
pub mod engine;
pub mod error;
pub mod models;
pub mod search;
pub mod validation;

pub use error::{Result, TimetableError};
