//! Timetable domain models.
//!
//! Provides the data types flowing through the engine: raw session
//! records from the cart, validated sessions, course groups, and the
//! schedule candidates produced by the search.
//!
//! # Flow
//!
//! | Stage | Type |
//! |-------|------|
//! | Input | `SessionRecord` |
//! | Validated | `Session` (`Weekday`, `TimeOfDay`) |
//! | Grouped | `CourseGroups` of `CourseGroup` |
//! | Output | `ScheduleCandidate` with `Exclusion`s |

mod candidate;
mod groups;
mod session;
mod time;

pub use candidate::{Exclusion, ScheduleCandidate};
pub use groups::{CourseGroup, CourseGroups};
pub use session::{Session, SessionRecord};
pub use time::{TimeOfDay, Weekday};
