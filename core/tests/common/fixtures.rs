// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! Events are built from their stored JSON shape, the same way a persisted
//! collection is loaded.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::json;

use calgrid_core::{Event, Recurrence};

/// Creates a date, panicking on an invalid one.
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates a date and time without seconds.
#[must_use]
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

#[must_use]
pub fn hm(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).unwrap()
}

/// Creates a stored one-time event.
///
/// # Arguments
///
/// * `id` - Event id, also used as the title
/// * `date` - Start in the form `YYYY-MM-DDTHH:MM`
/// * `end_time` - Optional end time in the form `HH:MM`
///
/// # Example
///
/// ```ignore
/// let event = test_event("standup", "2024-01-01T09:00", Some("09:15"));
/// ```
#[must_use]
pub fn test_event(id: &str, date: &str, end_time: Option<&str>) -> Event {
    serde_json::from_value(json!({
        "id": id,
        "title": id,
        "date": date,
        "endTime": end_time,
        "createdAt": "2024-01-01T00:00:00Z",
    }))
    .unwrap()
}

/// Creates a stored event with a recurrence rule.
#[must_use]
pub fn test_recurring_event(
    id: &str,
    date: &str,
    end_time: Option<&str>,
    recurrence: Recurrence,
) -> Event {
    let mut event = test_event(id, date, end_time);
    event.recurrence = Some(recurrence);
    event
}
