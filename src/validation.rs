//! Input validation for session records.
//!
//! Turns raw [`SessionRecord`]s into [`Session`]s. A record that cannot be
//! scheduled is dropped and reported as a [`SessionDefect`]; it neither
//! blocks nor enables any combination. Detects:
//! - Missing course codes
//! - Missing or out-of-range day codes
//! - Unparsable start/end times
//! - Empty or inverted intervals (`start >= end`)
//!
//! Checks run in that order and stop at the first defect of a record.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::{Session, SessionRecord, TimeOfDay, Weekday};

/// A rejected input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDefect {
    /// Position of the record in the input.
    pub index: usize,
    /// Course code as given (may be empty).
    pub course_code: String,
    /// Defect category.
    pub kind: DefectKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of record defects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefectKind {
    /// The course code is empty or blank.
    MissingCourseCode,
    /// The day code is missing or not an accepted day.
    InvalidDay,
    /// A start or end time is not `HH:MM`.
    InvalidTime,
    /// The end time is not after the start time.
    InvalidInterval,
}

impl SessionDefect {
    fn new(index: usize, record: &SessionRecord, kind: DefectKind, message: String) -> Self {
        Self {
            index,
            course_code: record.course_code.clone(),
            kind,
            message,
        }
    }
}

/// Validates one record.
///
/// `allowed_days` is the set of weekdays a session may meet on; any other
/// day code is a [`DefectKind::InvalidDay`].
pub fn validate_record(
    index: usize,
    record: &SessionRecord,
    allowed_days: &[Weekday],
) -> Result<Session, SessionDefect> {
    if record.course_code.trim().is_empty() {
        return Err(SessionDefect::new(
            index,
            record,
            DefectKind::MissingCourseCode,
            format!("Record {index} has no course code"),
        ));
    }

    let day = match record.day {
        None => {
            return Err(SessionDefect::new(
                index,
                record,
                DefectKind::InvalidDay,
                format!("Record {index} ({}) has no day", record.course_code),
            ))
        }
        Some(code) => Weekday::from_index(code)
            .filter(|d| allowed_days.contains(d))
            .ok_or_else(|| {
                SessionDefect::new(
                    index,
                    record,
                    DefectKind::InvalidDay,
                    format!(
                        "Record {index} ({}) has invalid day {code}",
                        record.course_code
                    ),
                )
            })?,
    };

    let start = parse_time(index, record, &record.start_time, "start")?;
    let end = parse_time(index, record, &record.end_time, "end")?;

    if start >= end {
        return Err(SessionDefect::new(
            index,
            record,
            DefectKind::InvalidInterval,
            format!(
                "Record {index} ({}) ends at {end}, not after its start {start}",
                record.course_code
            ),
        ));
    }

    Ok(Session::from_record(record, day, start, end))
}

fn parse_time(
    index: usize,
    record: &SessionRecord,
    raw: &str,
    which: &str,
) -> Result<TimeOfDay, SessionDefect> {
    raw.parse::<TimeOfDay>().map_err(|e| {
        SessionDefect::new(
            index,
            record,
            DefectKind::InvalidTime,
            format!("Record {index} ({}) {which} time: {e}", record.course_code),
        )
    })
}

/// Validates all records, keeping input order.
///
/// Returns the accepted sessions and one defect per dropped record. Each
/// dropped record is also logged at `warn` level.
pub fn validate_records(
    records: &[SessionRecord],
    allowed_days: &[Weekday],
) -> (Vec<Session>, Vec<SessionDefect>) {
    let mut sessions = Vec::with_capacity(records.len());
    let mut defects = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match validate_record(index, record, allowed_days) {
            Ok(session) => sessions.push(session),
            Err(defect) => {
                warn!("dropping session record: {}", defect.message);
                defects.push(defect);
            }
        }
    }

    (sessions, defects)
}
