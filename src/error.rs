//! Error types.
//!
//! Only two conditions are fatal to a timetable run: an input that leaves
//! no usable course after validation, and a search started over an empty
//! course universe. Defective individual records are not errors; they are
//! dropped and reported as [`SessionDefect`](crate::validation::SessionDefect)s.

/// Result type for timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Fatal timetable errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// Every input record was rejected (or there were none).
    #[error("no usable courses: {rejected} of {total} session records rejected")]
    NoUsableCourses {
        /// Number of input records.
        total: usize,
        /// Number of records dropped by validation.
        rejected: usize,
    },

    /// The search was given an empty course universe.
    #[error("no courses to schedule")]
    NoCourses,
}

/// A time-of-day string that is not `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day '{input}': expected HH:MM")]
pub struct ParseTimeError {
    /// The rejected input.
    pub input: String,
}

/// A day code outside the weekday range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid weekday code {0}: expected 0 (Monday) to 6 (Sunday)")]
pub struct InvalidWeekday(pub i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = TimetableError::NoUsableCourses {
            total: 3,
            rejected: 3,
        };
        assert_eq!(
            e.to_string(),
            "no usable courses: 3 of 3 session records rejected"
        );
        assert_eq!(TimetableError::NoCourses.to_string(), "no courses to schedule");

        let p = ParseTimeError {
            input: "25:00".into(),
        };
        assert!(p.to_string().contains("'25:00'"));
        assert!(InvalidWeekday(9).to_string().contains('9'));
    }
}
