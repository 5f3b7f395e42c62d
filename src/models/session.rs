//! Session models.
//!
//! A session is one weekly meeting of a course (a lecture, tutorial, or
//! lab slot). Several sessions may share a course code; the course code is
//! the unit of scheduling.
//!
//! [`SessionRecord`] is the raw record handed over by the cart, with
//! untyped day and time fields. [`Session`] is the validated form the
//! engine works with (see [`crate::validation`]).

use serde::{Deserialize, Serialize};

use super::{TimeOfDay, Weekday};

/// A raw session record, as supplied by the cart.
///
/// Every field defaults when absent or of the wrong type, so partially
/// filled records still deserialize and are rejected later by validation
/// instead of failing the whole input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionRecord {
    /// Course code shared by all sessions of one offering.
    #[serde(deserialize_with = "lenient::text")]
    pub course_code: String,
    /// 0-based day code (Monday = 0). `None` when missing or not an integer.
    #[serde(deserialize_with = "lenient::day")]
    pub day: Option<i64>,
    /// Start time, `HH:MM`.
    #[serde(deserialize_with = "lenient::text")]
    pub start_time: String,
    /// End time, `HH:MM`.
    #[serde(deserialize_with = "lenient::text")]
    pub end_time: String,
    #[serde(deserialize_with = "lenient::text")]
    pub venue: String,
    #[serde(deserialize_with = "lenient::text")]
    pub instructor: String,
    /// Session type (lecture, tutorial, lab, ...).
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub session_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub remarks: String,
    /// Credit value; 0 when not an integer.
    #[serde(deserialize_with = "lenient::credit")]
    pub credit: i32,
}

/// Field deserializers that fall back to an empty value on a type mismatch.
///
/// An empty course code or time is later reported by validation, as is a
/// `None` day.
mod lenient {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient<T> {
        Value(T),
        Other(#[allow(dead_code)] IgnoredAny),
    }

    impl<T> Lenient<T> {
        fn into_option(self) -> Option<T> {
            match self {
                Lenient::Value(v) => Some(v),
                Lenient::Other(_) => None,
            }
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(Lenient::<String>::deserialize(deserializer)?
            .into_option()
            .unwrap_or_default())
    }

    pub fn day<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Ok(Lenient::<i64>::deserialize(deserializer)?.into_option())
    }

    pub fn credit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        Ok(Lenient::<i32>::deserialize(deserializer)?
            .into_option()
            .unwrap_or_default())
    }
}

impl SessionRecord {
    /// Creates a record with the fields the engine needs.
    pub fn new(
        course_code: impl Into<String>,
        day: i64,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            day: Some(day),
            start_time: start_time.into(),
            end_time: end_time.into(),
            ..Default::default()
        }
    }

    /// Clears the day code.
    pub fn without_day(mut self) -> Self {
        self.day = None;
        self
    }

    /// Sets the venue.
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets the session type.
    pub fn with_type(mut self, session_type: impl Into<String>) -> Self {
        self.session_type = session_type.into();
        self
    }

    /// Sets the remarks.
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Sets the credit value.
    pub fn with_credit(mut self, credit: i32) -> Self {
        self.credit = credit;
        self
    }
}

/// A validated session.
///
/// # Invariants
/// - `start < end`
/// - `course_code` is non-empty
///
/// Descriptive fields (`venue`, `instructor`, `session_type`, `remarks`,
/// `credit`) are carried through unchanged for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub course_code: String,
    pub day: Weekday,
    /// Interval start (inclusive).
    #[serde(rename = "start_time")]
    pub start: TimeOfDay,
    /// Interval end (exclusive).
    #[serde(rename = "end_time")]
    pub end: TimeOfDay,
    pub venue: String,
    pub instructor: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub remarks: String,
    pub credit: i32,
}

impl Session {
    /// Creates a session with empty descriptive fields.
    ///
    /// The caller is responsible for `start < end`; records coming from
    /// outside should go through [`crate::validation::validate_record`].
    pub fn new(
        course_code: impl Into<String>,
        day: Weekday,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            day,
            start,
            end,
            venue: String::new(),
            instructor: String::new(),
            session_type: String::new(),
            remarks: String::new(),
            credit: 0,
        }
    }

    /// Builds a session from a record whose day and times are already
    /// parsed, carrying the descriptive fields over.
    pub(crate) fn from_record(
        record: &SessionRecord,
        day: Weekday,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            course_code: record.course_code.trim().to_string(),
            day,
            start,
            end,
            venue: record.venue.clone(),
            instructor: record.instructor.clone(),
            session_type: record.session_type.clone(),
            remarks: record.remarks.clone(),
            credit: record.credit,
        }
    }

    /// Sets the venue.
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets the session type.
    pub fn with_type(mut self, session_type: impl Into<String>) -> Self {
        self.session_type = session_type.into();
        self
    }

    /// Whether two sessions meet on the same day at overlapping times.
    ///
    /// Intervals are half-open: a session ending at 11:00 does not overlap
    /// one starting at 11:00.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn session(code: &str, day: Weekday, start: &str, end: &str) -> Session {
        Session::new(code, day, t(start), t(end))
    }

    #[test]
    fn test_record_builder() {
        let r = SessionRecord::new("COMP1117", 2, "09:30", "10:20")
            .with_venue("MWT1")
            .with_instructor("Dr. Lee")
            .with_type("Lecture")
            .with_remarks("Odd weeks")
            .with_credit(6);

        assert_eq!(r.course_code, "COMP1117");
        assert_eq!(r.day, Some(2));
        assert_eq!(r.session_type, "Lecture");
        assert_eq!(r.credit, 6);
        assert_eq!(r.without_day().day, None);
    }

    #[test]
    fn test_record_from_json_contract() {
        let json = r#"{
            "course_code": "MATH1013",
            "day": 0,
            "start_time": "10:00",
            "end_time": "11:30",
            "venue": "LE1",
            "instructor": "Prof. Chan",
            "type": "Tutorial",
            "remarks": "",
            "credit": 6
        }"#;
        let r: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.course_code, "MATH1013");
        assert_eq!(r.day, Some(0));
        assert_eq!(r.session_type, "Tutorial");
        assert_eq!(r.credit, 6);
    }

    #[test]
    fn test_record_missing_fields_default() {
        let r: SessionRecord =
            serde_json::from_str(r#"{"course_code": "X", "day": null}"#).unwrap();
        assert_eq!(r.day, None);
        assert!(r.start_time.is_empty());
        assert_eq!(r.credit, 0);
    }

    #[test]
    fn test_record_wrong_types_fall_back() {
        let json = r#"[
            {"course_code": "A", "day": 0, "start_time": "10:00", "end_time": "11:00"},
            {"course_code": "B", "day": "Mon", "start_time": "10:00", "end_time": "11:00"},
            {"course_code": "C", "day": 1, "start_time": 930, "end_time": "11:00", "credit": "six"},
            {"course_code": 42, "day": 2, "start_time": "10:00", "end_time": "11:00", "venue": null}
        ]"#;
        let records: Vec<SessionRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 4);

        assert_eq!(records[0].day, Some(0));
        assert_eq!(records[1].day, None);
        assert_eq!(records[1].course_code, "B");
        assert!(records[2].start_time.is_empty());
        assert_eq!(records[2].end_time, "11:00");
        assert_eq!(records[2].credit, 0);
        assert!(records[3].course_code.is_empty());
        assert!(records[3].venue.is_empty());
    }

    #[test]
    fn test_overlap_same_day() {
        let a = session("A", Weekday::Monday, "10:00", "11:30");
        let b = session("B", Weekday::Monday, "11:00", "12:00");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_does_not_overlap() {
        let a = session("A", Weekday::Monday, "10:00", "11:00");
        let b = session("B", Weekday::Monday, "11:00", "12:00");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_different_days_do_not_overlap() {
        let a = session("A", Weekday::Monday, "10:00", "12:00");
        let b = session("B", Weekday::Tuesday, "10:00", "12:00");
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = session("A", Weekday::Friday, "09:00", "13:00");
        let inner = session("B", Weekday::Friday, "10:00", "10:30");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_session_serializes_contract_names() {
        let s = session("A", Weekday::Wednesday, "09:00", "10:00").with_type("Lab");
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["day"], 2);
        assert_eq!(v["start_time"], "09:00");
        assert_eq!(v["end_time"], "10:00");
        assert_eq!(v["type"], "Lab");
    }
}
