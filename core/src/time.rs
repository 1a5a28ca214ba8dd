// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// NOTE: Used for persisting events, so it should be stable across different runs.
pub const STABLE_FORMAT_DATE: &str = "%Y-%m-%d";
pub const STABLE_FORMAT_DATETIME: &str = "%Y-%m-%dT%H:%M";
pub const STABLE_FORMAT_DATETIME_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
pub const STABLE_FORMAT_TIME: &str = "%H:%M";
pub const STABLE_FORMAT_TIME_SECONDS: &str = "%H:%M:%S";

const MINUTES_PER_HOUR: u16 = 60;

/// A time of day with minute precision, stored as minutes since midnight.
///
/// Ordering matches the lexical ordering of zero-padded `HH:MM` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, 00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Creates a time of day from hours and minutes, `None` if out of range.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < MINUTES_PER_HOUR).then(|| Self(hour * MINUTES_PER_HOUR + minute))
    }

    /// Minutes elapsed since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(&self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates seconds and below.
    fn from(t: NaiveTime) -> Self {
        // hour < 24 and minute < 60, always fits
        Self((t.hour() * 60 + t.minute()) as u16)
    }
}

impl From<NaiveDateTime> for TimeOfDay {
    fn from(dt: NaiveDateTime) -> Self {
        dt.time().into()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parses a date in the form `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), STABLE_FORMAT_DATE).ok()
}

/// Parses a time in the form `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, STABLE_FORMAT_TIME)
        .or_else(|_| NaiveTime::parse_from_str(s, STABLE_FORMAT_TIME_SECONDS))
        .ok()
}

/// Parses a date and time in the form `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, STABLE_FORMAT_DATETIME)
        .or_else(|_| NaiveDateTime::parse_from_str(s, STABLE_FORMAT_DATETIME_SECONDS))
        .ok()
}

/// Formats a date and time, seconds are only written when non-zero.
pub fn format_date_time(dt: &NaiveDateTime) -> String {
    match dt.second() {
        0 => dt.format(STABLE_FORMAT_DATETIME).to_string(),
        _ => dt.format(STABLE_FORMAT_DATETIME_SECONDS).to_string(),
    }
}

/// Formats a time, seconds are only written when non-zero.
pub fn format_time(t: &NaiveTime) -> String {
    match t.second() {
        0 => t.format(STABLE_FORMAT_TIME).to_string(),
        _ => t.format(STABLE_FORMAT_TIME_SECONDS).to_string(),
    }
}

/// Serde adapter for `NaiveDateTime` in the stable event format.
pub(crate) mod serde_date_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date_time(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_date_time(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid date and time: {s}")))
    }
}

/// Serde adapter for an optional `NaiveTime` in the stable event format.
pub(crate) mod serde_opt_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => serializer.serialize_some(&super::format_time(t)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            // the original form stores an empty end time as "" or null
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => super::parse_time(&s)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid time: {s}"))),
            None => Ok(None),
        }
    }
}
