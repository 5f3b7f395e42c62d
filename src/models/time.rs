//! Weekday and time-of-day models.
//!
//! # Time Model
//! A session occupies a half-open interval `[start, end)` of minutes since
//! midnight on one weekday. There is no date, timezone, or week number:
//! the timetable repeats every week.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidWeekday, ParseTimeError};

/// Day of the week a session meets on.
///
/// Serialized as its 0-based code (Monday = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday through Friday.
    pub const WORKDAYS: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// 0-based day code.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a day by its 0-based code.
    pub fn from_index(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// English day name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Whether this is Saturday or Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Weekday> for i64 {
    fn from(day: Weekday) -> Self {
        i64::from(day.index())
    }
}

impl TryFrom<i64> for Weekday {
    type Error = InvalidWeekday;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_index(code).ok_or(InvalidWeekday(code))
    }
}

/// Wall-clock time of day with minute precision.
///
/// Stored as minutes since midnight (`0..1440`). Parsed from and
/// displayed as zero-padded `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Minutes in a day.
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Creates a time from minutes since midnight.
    ///
    /// Returns `None` if `minutes >= 1440`.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < Self::MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Creates a time from hour and minute.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| ParseTimeError {
            input: s.to_string(),
        })?;
        // Both fields come from a validated NaiveTime, so they fit.
        Ok(Self((time.hour() * 60 + time.minute()) as u16))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_codes() {
        assert_eq!(Weekday::Monday.index(), 0);
        assert_eq!(Weekday::Friday.index(), 4);
        assert_eq!(Weekday::from_index(2), Some(Weekday::Wednesday));
        assert_eq!(Weekday::from_index(7), None);
        assert_eq!(Weekday::from_index(-1), None);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Weekday::Monday.name(), "Monday");
        assert_eq!(Weekday::Thursday.to_string(), "Thursday");
        assert!(Weekday::Sunday.is_weekend());
        assert!(!Weekday::Friday.is_weekend());
        assert!(Weekday::WORKDAYS.iter().all(|d| !d.is_weekend()));
    }

    #[test]
    fn test_weekday_serde_as_code() {
        let json = serde_json::to_string(&Weekday::Tuesday).unwrap();
        assert_eq!(json, "1");
        let day: Weekday = serde_json::from_str("4").unwrap();
        assert_eq!(day, Weekday::Friday);
        assert!(serde_json::from_str::<Weekday>("9").is_err());
    }

    #[test]
    fn test_time_parse() {
        let t: TimeOfDay = "10:30".parse().unwrap();
        assert_eq!(t.minutes(), 630);
        assert_eq!(t.hour(), 10);
        assert_eq!(t.minute(), 30);

        let padded: TimeOfDay = " 08:05 ".parse().unwrap();
        assert_eq!(padded, TimeOfDay::from_hm(8, 5).unwrap());
    }

    #[test]
    fn test_time_parse_rejects_garbage() {
        assert!("".parse::<TimeOfDay>().is_err());
        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("10:75".parse::<TimeOfDay>().is_err());
        assert!("ten".parse::<TimeOfDay>().is_err());
        let err = "noon".parse::<TimeOfDay>().unwrap_err();
        assert_eq!(err.input, "noon");
    }

    #[test]
    fn test_time_display_and_order() {
        let early = TimeOfDay::from_hm(9, 0).unwrap();
        let late = TimeOfDay::from_hm(13, 45).unwrap();
        assert_eq!(early.to_string(), "09:00");
        assert_eq!(late.to_string(), "13:45");
        assert!(early < late);
    }

    #[test]
    fn test_time_bounds() {
        assert!(TimeOfDay::from_minutes(1439).is_some());
        assert!(TimeOfDay::from_minutes(1440).is_none());
        assert!(TimeOfDay::from_hm(24, 0).is_none());
        assert!(TimeOfDay::from_hm(23, 60).is_none());
    }

    #[test]
    fn test_time_serde_as_string() {
        let t = TimeOfDay::from_hm(14, 0).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"14:00\"");
        let back: TimeOfDay = serde_json::from_str("\"14:00\"").unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<TimeOfDay>("\"2pm\"").is_err());
    }
}
