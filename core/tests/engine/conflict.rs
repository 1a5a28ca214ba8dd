// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Conflict classification and recurring conflict detection.

use calgrid_core::{
    ConflictDetector, ConflictType, EventDraft, Recurrence, find_conflicts,
    find_recurring_conflicts, materialize_anchor, overlaps,
};

use crate::common::{assert_conflict_types, at, hm, test_event, test_recurring_event};

#[test]
fn conflict_types_against_nine_to_ten() {
    // Arrange
    let events = vec![test_event("existing", "2024-01-01T09:00", Some("10:00"))];
    let cases = [
        ((9, 15), (9, 45), ConflictType::Contained),
        ((8, 0), (11, 0), ConflictType::Contains),
        ((8, 30), (9, 30), ConflictType::OverlapsStart),
        ((9, 30), (10, 30), ConflictType::OverlapsEnd),
    ];

    for ((sh, sm), (eh, em), expected) in cases {
        // Act
        let candidate = EventDraft::new("candidate", at(2024, 1, 1, sh, sm)).with_end_time(hm(eh, em));
        let conflicts = find_conflicts(&events, &candidate, None);

        // Assert
        assert_conflict_types(&conflicts, &[("existing", expected)]);
    }

    // touching at the boundary is no conflict
    let adjacent = EventDraft::new("candidate", at(2024, 1, 1, 10, 0)).with_end_time(hm(11, 0));
    assert!(find_conflicts(&events, &adjacent, None).is_empty());
}

#[test]
fn default_duration_applies_to_both_sides() {
    let events = vec![test_event("call", "2024-01-01T14:00", None)];

    let at_half_past = EventDraft::new("candidate", at(2024, 1, 1, 14, 30));
    assert_conflict_types(
        &find_conflicts(&events, &at_half_past, None),
        &[("call", ConflictType::OverlapsEnd)],
    );

    let at_three = EventDraft::new("candidate", at(2024, 1, 1, 15, 0));
    assert!(find_conflicts(&events, &at_three, None).is_empty());
}

#[test]
fn conflicts_keep_collection_order() {
    let events = vec![
        test_event("b", "2024-01-01T09:00", Some("12:00")),
        test_event("a", "2024-01-01T10:00", Some("10:30")),
        test_event("other-day", "2024-01-02T10:00", Some("10:30")),
    ];
    let candidate = EventDraft::new("candidate", at(2024, 1, 1, 10, 0)).with_end_time(hm(11, 0));

    assert_conflict_types(
        &find_conflicts(&events, &candidate, None),
        &[("b", ConflictType::Contained), ("a", ConflictType::Contains)],
    );
}

#[test]
fn overlap_is_symmetric_and_self_excluded() {
    let events = vec![
        test_event("a", "2024-01-01T09:00", Some("10:00")),
        test_event("b", "2024-01-01T09:30", Some("11:00")),
        test_event("c", "2024-01-01T10:00", Some("11:00")),
    ];

    for x in &events {
        for y in &events {
            let (ix, iy) = (materialize_anchor(x), materialize_anchor(y));
            assert_eq!(overlaps(&ix, &iy), overlaps(&iy, &ix));
        }

        let conflicts = find_conflicts(&events, x, Some(&x.id));
        assert!(conflicts.iter().all(|c| c.event.id != x.id));
    }
}

#[test]
fn weekly_recurring_conflict_on_later_week() {
    // Arrange: weekly Monday 09:00-10:00 from 2024-01-01
    let events = vec![test_recurring_event(
        "standup",
        "2024-01-01T09:00",
        Some("10:00"),
        Recurrence::weekly(),
    )];
    let detector = ConflictDetector::default();

    // Act & Assert
    let overlapping =
        EventDraft::new("candidate", at(2024, 1, 15, 9, 30)).with_end_time(hm(10, 30));
    assert!(detector.find_recurring_conflicts(&events, &overlapping, None));
    // anchor dates differ, so the one-shot check stays silent
    assert!(detector.find_conflicts(&events, &overlapping, None).is_empty());

    let tuesday = EventDraft::new("candidate", at(2024, 1, 16, 9, 30)).with_end_time(hm(10, 30));
    assert!(!find_recurring_conflicts(&events, &tuesday, None));

    let after = EventDraft::new("candidate", at(2024, 1, 15, 10, 0)).with_end_time(hm(11, 0));
    assert!(!find_recurring_conflicts(&events, &after, None));
}

#[test]
fn check_reports_both_kinds() {
    let events = vec![
        test_event("lunch", "2024-01-08T12:00", Some("13:00")),
        test_recurring_event(
            "gym",
            "2024-01-01T12:30",
            Some("13:30"),
            Recurrence::weekly(),
        ),
    ];
    let candidate = EventDraft::new("candidate", at(2024, 1, 8, 12, 15));

    let report = ConflictDetector::default().check(&events, &candidate, None);
    assert_conflict_types(&report.conflicts, &[("lunch", ConflictType::OverlapsEnd)]);
    assert!(report.recurring);
    assert_eq!(
        report.to_string(),
        "conflicts with 1 existing event and recurring events"
    );
}
