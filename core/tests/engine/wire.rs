// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Loading a stored event collection.

use serde_json::json;

use calgrid_core::{DEFAULT_COLOR, Event, EventStore, RecurrenceKind, RecurrenceUnit};

use crate::common::{at, date, hm};

#[test]
fn loads_collection_written_by_older_versions() {
    // Arrange
    let raw = json!([
        {
            "id": "1",
            "title": "Standup",
            "date": "2024-01-01T09:00",
            "endTime": "09:15",
            "recurrence": { "type": "weekly" },
            "createdAt": "2023-12-31T12:00:00.000Z"
        },
        {
            "id": "2",
            "title": "Lunch",
            "description": "with team",
            "date": "2024-01-02T12:00",
            "endTime": "",
            "color": "#ef4444",
            "recurrence": { "type": "none" },
            "createdAt": "2023-12-31T12:00:00.000Z"
        },
        {
            "id": "3",
            "title": "Mystery",
            "date": "2024-01-03T08:00",
            "recurrence": { "type": "yearly", "interval": 2, "unit": "fortnights" },
            "createdAt": "2023-12-31T12:00:00.000Z"
        }
    ]);

    // Act
    let events: Vec<Event> = serde_json::from_value(raw).unwrap();
    let store = EventStore::from(events);

    // Assert
    let standup = &store.events()[0];
    assert_eq!(standup.date, at(2024, 1, 1, 9, 0));
    assert_eq!(standup.end_time, Some(hm(9, 15)));
    assert_eq!(standup.color, DEFAULT_COLOR);

    let lunch = &store.events()[1];
    assert_eq!(lunch.end_time, None);
    assert_eq!(lunch.recurrence, None);

    let mystery = store.events()[2].recurrence.as_ref().unwrap();
    assert_eq!(mystery.kind, RecurrenceKind::Unrecognized);
    assert_eq!(mystery.unit, Some(RecurrenceUnit::Unrecognized));

    // unrecognized recurrences never occur, not even on their anchor date
    let titles: Vec<_> = store
        .events_on_day(date(2024, 1, 3))
        .into_iter()
        .map(|e| e.title.as_str())
        .collect();
    assert!(titles.is_empty());
    assert_eq!(store.events_on_day(date(2024, 1, 8)).len(), 1);
}

#[test]
fn rejects_malformed_dates() {
    let raw = json!({ "id": "1", "title": "Bad", "date": "01/02/2024 9am" });
    assert!(serde_json::from_value::<Event>(raw).is_err());
}
