//! Schedule candidate (search result) model.
//!
//! A candidate is one maximum conflict-free set of course codes, plus an
//! explanation of what each left-out course clashes with.
//!
//! Exclusion lists only name conflicts against the *selected* codes.
//! Conflicts between two excluded codes are not reported, and an excluded
//! code may have an empty list when it was left out only because an
//! equally large alternative was chosen.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::{CourseGroups, Session};

/// An excluded course code and the selected codes it conflicts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    pub course_code: String,
    /// Selected codes, in selection order.
    pub conflicts_with: Vec<String>,
}

impl Exclusion {
    pub fn new(course_code: impl Into<String>, conflicts_with: Vec<String>) -> Self {
        Self {
            course_code: course_code.into(),
            conflicts_with,
        }
    }
}

/// One maximum conflict-free selection of course codes.
///
/// Immutable once produced by the search.
///
/// # Serialization
/// ```json
/// {"selected": ["A", "C"], "excluded": {"B": ["A"]}}
/// ```
/// `excluded` keys keep input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleCandidate {
    selected: Vec<String>,
    #[serde(with = "exclusion_map")]
    excluded: Vec<Exclusion>,
}

impl ScheduleCandidate {
    pub(crate) fn new(selected: Vec<String>, excluded: Vec<Exclusion>) -> Self {
        Self { selected, excluded }
    }

    /// Selected course codes, in input order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Excluded course codes with their conflicts, in input order.
    pub fn excluded(&self) -> &[Exclusion] {
        &self.excluded
    }

    /// Number of selected course codes.
    #[inline]
    pub fn size(&self) -> usize {
        self.selected.len()
    }

    /// Whether a course code is selected.
    pub fn is_selected(&self, course_code: &str) -> bool {
        self.selected.iter().any(|c| c == course_code)
    }

    /// Conflicts recorded for an excluded course code.
    ///
    /// Returns `None` if the code is selected or unknown.
    pub fn excluded_conflicts(&self, course_code: &str) -> Option<&[String]> {
        self.excluded
            .iter()
            .find(|e| e.course_code == course_code)
            .map(|e| e.conflicts_with.as_slice())
    }

    /// Excluded course codes, in input order.
    pub fn excluded_codes(&self) -> Vec<&str> {
        self.excluded.iter().map(|e| e.course_code.as_str()).collect()
    }

    /// Resolves the selected codes back into sessions for display.
    ///
    /// Sessions come out grouped by selected code, in selection order, and
    /// in input order within each code.
    pub fn sessions<'a>(&self, groups: &'a CourseGroups) -> Vec<&'a Session> {
        self.selected
            .iter()
            .flat_map(|code| groups.sessions(code))
            .collect()
    }
}

/// Serde adapter writing `Vec<Exclusion>` as an order-preserving map.
mod exclusion_map {
    use super::*;

    pub fn serialize<S: Serializer>(
        excluded: &[Exclusion],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(excluded.len()))?;
        for e in excluded {
            map.serialize_entry(&e.course_code, &e.conflicts_with)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Exclusion>, D::Error> {
        struct ExclusionVisitor;

        impl<'de> Visitor<'de> for ExclusionVisitor {
            type Value = Vec<Exclusion>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from course code to conflicting course codes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut out = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((code, conflicts)) = access.next_entry::<String, Vec<String>>()? {
                    out.push(Exclusion::new(code, conflicts));
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(ExclusionVisitor)
    }
}
