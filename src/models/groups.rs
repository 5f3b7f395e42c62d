//! Course groups.
//!
//! A course group collects every session sharing one course code. Groups
//! are the unit of scheduling: a timetable takes all sessions of a code
//! or none of them.
//!
//! # Ordering
//! Groups keep the order in which their course codes first appear in the
//! input, and sessions keep input order within each group. The search
//! walks codes in this order, so it determines the order of the results.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use super::Session;

/// All sessions of one course code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseGroup {
    pub course_code: String,
    pub sessions: Vec<Session>,
}

impl CourseGroup {
    /// Creates an empty group.
    pub fn new(course_code: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            sessions: Vec::new(),
        }
    }

    /// Whether any session of this group overlaps any session of `other`.
    ///
    /// Overlaps between sessions of the same group are never looked at.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.sessions
            .iter()
            .any(|s1| other.sessions.iter().any(|s2| s1.overlaps(s2)))
    }
}

/// Course groups in first-seen order, with lookup by code.
///
/// Serializes as a map from course code to its sessions, keys in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseGroups {
    groups: Vec<CourseGroup>,
    index: HashMap<String, usize>,
}

impl CourseGroups {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups sessions by course code.
    ///
    /// Duplicate sessions are kept as independent sessions of their code.
    pub fn from_sessions(sessions: impl IntoIterator<Item = Session>) -> Self {
        let mut groups = Self::new();
        for session in sessions {
            groups.push(session);
        }
        groups
    }

    /// Appends a session to its group, creating the group on first sight.
    pub fn push(&mut self, session: Session) {
        let pos = match self.index.get(&session.course_code) {
            Some(&pos) => pos,
            None => {
                let pos = self.groups.len();
                self.index.insert(session.course_code.clone(), pos);
                self.groups.push(CourseGroup::new(session.course_code.clone()));
                pos
            }
        };
        self.groups[pos].sessions.push(session);
    }

    /// Number of distinct course codes.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Course codes in first-seen order.
    pub fn codes(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.course_code.as_str()).collect()
    }

    /// Finds the group for a course code.
    pub fn get(&self, course_code: &str) -> Option<&CourseGroup> {
        self.index.get(course_code).map(|&i| &self.groups[i])
    }

    /// Position of a course code in first-seen order.
    pub fn position(&self, course_code: &str) -> Option<usize> {
        self.index.get(course_code).copied()
    }

    /// Group at a position.
    pub fn at(&self, position: usize) -> Option<&CourseGroup> {
        self.groups.get(position)
    }

    /// Sessions of a course code (empty if unknown).
    pub fn sessions(&self, course_code: &str) -> &[Session] {
        self.get(course_code)
            .map(|g| g.sessions.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates groups in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, CourseGroup> {
        self.groups.iter()
    }

    /// Total number of sessions across all groups.
    pub fn session_count(&self) -> usize {
        self.groups.iter().map(|g| g.sessions.len()).sum()
    }
}

impl<'a> IntoIterator for &'a CourseGroups {
    type Item = &'a CourseGroup;
    type IntoIter = std::slice::Iter<'a, CourseGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl Serialize for CourseGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.course_code, &group.sessions)?;
        }
        map.end()
    }
}
