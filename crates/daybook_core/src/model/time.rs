//! Minute-resolution time of day.
//!
//! # Responsibility
//! - Represent `HH:MM` wall-clock times as minutes since midnight.
//! - Parse and render the `HH:MM` wire form at the boundary.
//!
//! # Invariants
//! - The wrapped minute count is always below 1440.
//! - Ordering follows the clock: `09:00 < 18:30`.

use crate::model::ValidationError;
use chrono::{NaiveTime, Timelike};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock time of day with minute resolution.
///
/// Arithmetic-facing callers read [`TimeOfDay::minutes`]; persistence and
/// display use the `HH:MM` string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(pub(crate) u16);

impl TimeOfDay {
    /// Builds a time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self, ValidationError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ValidationError::InvalidTime(format!("{minutes}min")));
        }
        Ok(Self(minutes))
    }

    /// Parses `HH:MM` text.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let parsed = NaiveTime::parse_from_str(text.trim(), "%H:%M")
            .map_err(|_| ValidationError::InvalidTime(text.to_string()))?;
        // hour < 24 and minute < 60, so the sum stays below 1440.
        Ok(Self((parsed.hour() * 60 + parsed.minute()) as u16))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::TimeOfDay;
    use crate::model::ValidationError;

    #[test]
    fn parses_and_renders_padded_form() {
        let time = TimeOfDay::parse("09:05").expect("padded time should parse");
        assert_eq!(time.minutes(), 9 * 60 + 5);
        assert_eq!(time.to_string(), "09:05");
    }

    #[test]
    fn parse_rejects_out_of_range_and_garbage() {
        assert!(matches!(
            TimeOfDay::parse("24:00"),
            Err(ValidationError::InvalidTime(_))
        ));
        assert!(matches!(
            TimeOfDay::parse("soon"),
            Err(ValidationError::InvalidTime(_))
        ));
    }

    #[test]
    fn ordering_follows_the_clock() {
        let morning = TimeOfDay::parse("08:30").expect("valid");
        let evening = TimeOfDay::parse("20:00").expect("valid");
        assert!(morning < evening);
    }

    #[test]
    fn serde_round_trips_as_string() {
        let time = TimeOfDay::parse("18:00").expect("valid");
        let json = serde_json::to_string(&time).expect("serializes");
        assert_eq!(json, "\"18:00\"");
        let back: TimeOfDay = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, time);
    }
}
