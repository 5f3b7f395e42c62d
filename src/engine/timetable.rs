//! Timetable engine: validation, conflict analysis, and search in one call.
//!
//! # Algorithm
//! 1. Validate records against the accepted days, dropping defects.
//! 2. Group sessions by course code and build the conflict matrix.
//! 3. Enumerate every maximum conflict-free set of course codes.
//! 4. Assemble one candidate per set.
//!
//! Each run is independent and side-effect free apart from logging.

use serde::Serialize;

use crate::conflict::ConflictAnalyzer;
use crate::error::Result;
use crate::models::{CourseGroups, ScheduleCandidate, Session, SessionRecord, Weekday};
use crate::search::find_candidates;
use crate::validation::SessionDefect;

/// Result of one timetable run.
#[derive(Debug, Clone, Serialize)]
pub struct TimetableOutcome {
    /// Every maximum schedule, in discovery order.
    pub candidates: Vec<ScheduleCandidate>,
    /// Sessions by course code, for resolving `selected` codes.
    pub groups: CourseGroups,
    /// Input records that were dropped.
    pub defects: Vec<SessionDefect>,
}

impl TimetableOutcome {
    /// Number of courses in every candidate.
    pub fn schedule_size(&self) -> usize {
        self.candidates.first().map_or(0, |c| c.size())
    }

    /// Whether some input records were dropped.
    pub fn has_defects(&self) -> bool {
        !self.defects.is_empty()
    }

    /// Sessions of the candidate at `index`, for display.
    pub fn sessions_of(&self, index: usize) -> Option<Vec<&Session>> {
        self.candidates
            .get(index)
            .map(|c| c.sessions(&self.groups))
    }
}

/// Input container for one run.
#[derive(Debug, Clone)]
pub struct TimetableRequest {
    /// Session records from the cart.
    pub records: Vec<SessionRecord>,
    /// Days sessions may meet on for this run. `None` keeps the engine's.
    pub allowed_days: Option<Vec<Weekday>>,
}

impl TimetableRequest {
    /// Creates a request using the engine's accepted days.
    pub fn new(records: Vec<SessionRecord>) -> Self {
        Self {
            records,
            allowed_days: None,
        }
    }

    /// Overrides the accepted days for this request.
    pub fn with_allowed_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.allowed_days = Some(days.into_iter().collect());
        self
    }
}

/// Timetable combination engine.
///
/// # Example
///
/// ```
/// use u_timetable::engine::TimetableEngine;
/// use u_timetable::models::SessionRecord;
///
/// let records = vec![
///     SessionRecord::new("A", 0, "10:00", "11:30"),
///     SessionRecord::new("B", 0, "11:00", "12:00"),
///     SessionRecord::new("C", 2, "09:00", "10:00"),
/// ];
///
/// let outcome = TimetableEngine::new().run(&records).unwrap();
/// assert_eq!(outcome.candidates.len(), 2);
/// assert_eq!(outcome.candidates[0].selected(), ["A", "C"]);
/// assert_eq!(outcome.candidates[1].selected(), ["B", "C"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableEngine {
    analyzer: ConflictAnalyzer,
}

impl TimetableEngine {
    /// Creates an engine accepting Monday to Friday.
    pub fn new() -> Self {
        Self {
            analyzer: ConflictAnalyzer::new(),
        }
    }

    /// Sets the days sessions may meet on.
    pub fn with_allowed_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.analyzer = self.analyzer.with_allowed_days(days);
        self
    }

    /// Accepts all seven days.
    pub fn with_weekends(self) -> Self {
        self.with_allowed_days(Weekday::ALL)
    }

    /// Days sessions may meet on.
    pub fn allowed_days(&self) -> &[Weekday] {
        self.analyzer.allowed_days()
    }

    /// Computes every maximum conflict-free schedule.
    ///
    /// # Errors
    /// [`TimetableError::NoUsableCourses`](crate::error::TimetableError::NoUsableCourses)
    /// if no record survives validation.
    pub fn run(&self, records: &[SessionRecord]) -> Result<TimetableOutcome> {
        let analysis = self.analyzer.analyze(records)?;
        let candidates = find_candidates(&analysis.codes(), analysis.matrix())?;
        let (groups, _, defects) = analysis.into_parts();

        Ok(TimetableOutcome {
            candidates,
            groups,
            defects,
        })
    }

    /// Runs a request, applying its accepted days if it carries any.
    pub fn run_request(&self, request: &TimetableRequest) -> Result<TimetableOutcome> {
        match &request.allowed_days {
            Some(days) => self
                .clone()
                .with_allowed_days(days.iter().copied())
                .run(&request.records),
            None => self.run(&request.records),
        }
    }
}
