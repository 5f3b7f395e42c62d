//! Session grouping and conflict analysis.
//!
//! # Algorithm
//! 1. Validate records, dropping defective ones (see [`crate::validation`]).
//! 2. Group sessions by course code in first-seen order.
//! 3. For every unordered pair of groups, mark a conflict if any session of
//!    one overlaps any session of the other (same day, half-open
//!    intervals intersect).
//!
//! # Complexity
//! O(s²) session comparisons in the worst case, where s = sessions.

use log::debug;

use super::ConflictMatrix;
use crate::error::{Result, TimetableError};
use crate::models::{CourseGroups, Session, SessionRecord, Weekday};
use crate::validation::{validate_records, SessionDefect};

/// Validates, groups, and analyzes session records.
///
/// # Example
///
/// ```
/// use u_timetable::conflict::ConflictAnalyzer;
/// use u_timetable::models::SessionRecord;
///
/// let records = vec![
///     SessionRecord::new("A", 0, "10:00", "11:30"),
///     SessionRecord::new("B", 0, "11:00", "12:00"),
///     SessionRecord::new("C", 0, "11:30", "12:30"),
/// ];
/// let analysis = ConflictAnalyzer::new().analyze(&records).unwrap();
/// assert!(analysis.conflicts("A", "B"));
/// assert!(!analysis.conflicts("A", "C"));
/// ```
#[derive(Debug, Clone)]
pub struct ConflictAnalyzer {
    allowed_days: Vec<Weekday>,
}

impl ConflictAnalyzer {
    /// Creates an analyzer accepting Monday to Friday.
    pub fn new() -> Self {
        Self {
            allowed_days: Weekday::WORKDAYS.to_vec(),
        }
    }

    /// Sets the days a session may meet on.
    pub fn with_allowed_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut days: Vec<Weekday> = days.into_iter().collect();
        days.sort();
        days.dedup();
        self.allowed_days = days;
        self
    }

    /// Days a session may meet on.
    pub fn allowed_days(&self) -> &[Weekday] {
        &self.allowed_days
    }

    /// Analyzes raw records.
    ///
    /// Defective records are dropped and returned in
    /// [`ConflictAnalysis::defects`].
    ///
    /// # Errors
    /// [`TimetableError::NoUsableCourses`] if no record survives validation.
    pub fn analyze(&self, records: &[SessionRecord]) -> Result<ConflictAnalysis> {
        let (sessions, defects) = validate_records(records, &self.allowed_days);

        if sessions.is_empty() {
            return Err(TimetableError::NoUsableCourses {
                total: records.len(),
                rejected: defects.len(),
            });
        }

        let mut analysis = ConflictAnalysis::from_sessions(sessions)?;
        analysis.defects = defects;
        Ok(analysis)
    }
}

impl Default for ConflictAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Grouped sessions and their conflict matrix.
///
/// Matrix indices are positions in [`CourseGroups`] order.
#[derive(Debug, Clone)]
pub struct ConflictAnalysis {
    groups: CourseGroups,
    matrix: ConflictMatrix,
    defects: Vec<SessionDefect>,
}

impl ConflictAnalysis {
    /// Analyzes already-validated sessions.
    ///
    /// # Errors
    /// [`TimetableError::NoUsableCourses`] if `sessions` is empty.
    pub fn from_sessions(sessions: impl IntoIterator<Item = Session>) -> Result<Self> {
        let groups = CourseGroups::from_sessions(sessions);
        if groups.is_empty() {
            return Err(TimetableError::NoUsableCourses {
                total: 0,
                rejected: 0,
            });
        }

        let matrix = build_matrix(&groups);
        debug!(
            "analyzed {} sessions in {} course groups, {} conflicting pairs",
            groups.session_count(),
            groups.len(),
            matrix.conflict_count()
        );

        Ok(Self {
            groups,
            matrix,
            defects: Vec::new(),
        })
    }

    /// Course groups in first-seen order.
    pub fn groups(&self) -> &CourseGroups {
        &self.groups
    }

    /// Conflict matrix over group positions.
    pub fn matrix(&self) -> &ConflictMatrix {
        &self.matrix
    }

    /// Records dropped by validation.
    pub fn defects(&self) -> &[SessionDefect] {
        &self.defects
    }

    /// Course codes in first-seen order.
    pub fn codes(&self) -> Vec<&str> {
        self.groups.codes()
    }

    /// Whether two course codes conflict.
    ///
    /// A code never conflicts with itself; unknown codes never conflict.
    pub fn conflicts(&self, a: &str, b: &str) -> bool {
        match (self.groups.position(a), self.groups.position(b)) {
            (Some(i), Some(j)) => self.matrix.conflicts(i, j),
            _ => false,
        }
    }

    /// Splits the analysis into groups, matrix, and defects.
    pub fn into_parts(self) -> (CourseGroups, ConflictMatrix, Vec<SessionDefect>) {
        (self.groups, self.matrix, self.defects)
    }
}

fn build_matrix(groups: &CourseGroups) -> ConflictMatrix {
    let n = groups.len();
    let mut matrix = ConflictMatrix::new(n);
    for (i, a) in groups.iter().enumerate() {
        for (j, b) in groups.iter().enumerate().skip(i + 1) {
            if a.conflicts_with(b) {
                matrix.set_conflict(i, j);
            }
        }
    }
    matrix
}
