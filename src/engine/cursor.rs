//! Stepping through candidates one at a time.

use crate::models::ScheduleCandidate;

/// A position within a non-empty list of candidates.
///
/// Starts at the first candidate and never moves outside the list.
///
/// # Example
///
/// ```
/// use u_timetable::engine::{CandidateCursor, TimetableEngine};
/// use u_timetable::models::SessionRecord;
///
/// let records = vec![
///     SessionRecord::new("A", 0, "10:00", "11:30"),
///     SessionRecord::new("B", 0, "11:00", "12:00"),
/// ];
/// let outcome = TimetableEngine::new().run(&records).unwrap();
///
/// let mut cursor = CandidateCursor::new(outcome.candidates).unwrap();
/// assert_eq!(cursor.position(), (1, 2));
/// assert!(cursor.next());
/// assert_eq!(cursor.current().selected(), ["B"]);
/// assert!(!cursor.next());
/// ```
#[derive(Debug, Clone)]
pub struct CandidateCursor {
    candidates: Vec<ScheduleCandidate>,
    index: usize,
}

impl CandidateCursor {
    /// Creates a cursor at the first candidate.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn new(candidates: Vec<ScheduleCandidate>) -> Option<Self> {
        if candidates.is_empty() {
            None
        } else {
            Some(Self {
                candidates,
                index: 0,
            })
        }
    }

    /// The candidate under the cursor.
    pub fn current(&self) -> &ScheduleCandidate {
        &self.candidates[self.index]
    }

    /// Moves to the next candidate. Returns whether the cursor moved.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous candidate. Returns whether the cursor moved.
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.candidates.len()
    }

    #[inline]
    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    /// `(current, total)`, with `current` counted from 1.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.candidates.len())
    }

    /// 0-based index of the current candidate.
    pub fn index(&self) -> usize {
        self.index
    }

    /// All candidates.
    pub fn candidates(&self) -> &[ScheduleCandidate] {
        &self.candidates
    }

    /// Consumes the cursor, returning the candidates.
    pub fn into_candidates(self) -> Vec<ScheduleCandidate> {
        self.candidates
    }
}
