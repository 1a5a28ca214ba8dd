// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event store lifecycle: validate, add, update, delete.

use calgrid_core::{
    ConflictDetector, ConflictType, Error, EventForm, EventPatch, EventStore, Recurrence,
    RecurrenceResolver, RecurrenceUnit,
};

use crate::common::{at, date, test_event, test_recurring_event};

fn form(title: &str, date: &str, time: &str, end_time: &str) -> EventForm {
    EventForm {
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        end_time: end_time.to_string(),
        ..Default::default()
    }
}

#[test]
fn store_lifecycle_from_forms() {
    // Arrange
    let mut store = EventStore::new();

    // Act: add two overlapping events
    let draft = form("Standup", "2024-01-01", "09:00", "09:30").validate().unwrap();
    let (standup, report) = store.add(draft);
    assert!(report.is_empty());

    let draft = form("Review", "2024-01-01", "09:15", "").validate().unwrap();
    let (review, report) = store.add(draft);

    // Assert: the second is stored despite the conflict
    assert_eq!(report.conflicts.len(), 1);
    assert_eq!(report.conflicts[0].event.id, standup.id);
    assert_eq!(report.conflicts[0].conflict_type, ConflictType::OverlapsEnd);
    assert_eq!(store.len(), 2);

    // Act: move the review out of the way
    let draft = form("Review", "2024-01-01", "10:00", "").validate().unwrap();
    let (moved, report) = store.update(&review.id, draft.into()).unwrap();
    assert!(report.is_empty());
    assert_eq!(moved.date, at(2024, 1, 1, 10, 0));
    assert_eq!(moved.created_at, review.created_at);

    // Act: delete
    store.delete(&standup.id).unwrap();
    assert_eq!(store.events(), std::slice::from_ref(&moved));
    assert!(matches!(store.delete(&standup.id), Err(Error::NotFound(_))));
}

#[test]
fn store_update_can_clear_recurrence() {
    let mut store = EventStore::from(vec![test_recurring_event(
        "gym",
        "2024-01-01T07:00",
        None,
        Recurrence::daily(),
    )]);
    let id = store.events()[0].id.clone();
    assert_eq!(store.events_on_day(date(2024, 1, 5)).len(), 1);

    let patch = EventPatch {
        recurrence: Some(None),
        ..Default::default()
    };
    store.update(&id, patch).unwrap();
    assert!(store.events_on_day(date(2024, 1, 5)).is_empty());
    assert_eq!(store.events_on_day(date(2024, 1, 1)).len(), 1);
}

#[test]
fn store_uses_configured_step_cap() {
    let events = vec![test_recurring_event(
        "tick",
        "2024-01-01T07:00",
        None,
        Recurrence::custom(1, RecurrenceUnit::Days),
    )];
    let far = date(2024, 12, 31);

    let store = EventStore::from(events.clone());
    assert!(store.events_on_day(far).is_empty());

    let detector = ConflictDetector::new(RecurrenceResolver::new(1000));
    let store = EventStore::with_detector(events, detector);
    assert_eq!(store.events_on_day(far).len(), 1);
}

#[test]
fn store_check_does_not_store() {
    let store = EventStore::from(vec![test_event("a", "2024-01-01T09:00", Some("10:00"))]);
    let candidate = form("b", "2024-01-01", "09:30", "").validate().unwrap();

    let report = store.check(&candidate, None);
    assert_eq!(report.conflicts.len(), 1);
    assert_eq!(store.len(), 1);
}
