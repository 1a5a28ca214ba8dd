// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Occurrence properties of each recurrence kind over long date ranges.

use chrono::{Datelike, Days, Weekday};

use calgrid_core::{Recurrence, RecurrenceResolver, RecurrenceUnit, occurs_on};

use crate::common::{assert_occurs_exactly_on, date, test_event, test_recurring_event};

#[test]
fn one_time_event_occurs_once_in_a_thousand_days() {
    // Arrange
    let event = test_event("dentist", "2024-03-15T10:00", None);
    let from = date(2023, 1, 1);

    // Act
    let count = (0..1000)
        .filter(|i| occurs_on(&event, from + Days::new(*i)))
        .count();

    // Assert
    assert_eq!(count, 1);
    assert!(occurs_on(&event, date(2024, 3, 15)));
}

#[test]
fn weekly_event_repeats_on_mondays_for_two_years() {
    // 2024-01-01 is a Monday
    let anchor = date(2024, 1, 1);
    let event = test_recurring_event(
        "review",
        "2024-01-01T14:00",
        Some("15:00"),
        Recurrence::weekly(),
    );

    assert_occurs_exactly_on(&event, date(2023, 12, 1), 2 * 366, |day| {
        day >= anchor && day.weekday() == Weekday::Mon
    });
}

#[test]
fn daily_event_occurs_on_and_after_anchor() {
    let anchor = date(2024, 2, 28);
    let event = test_recurring_event("walk", "2024-02-28T07:00", None, Recurrence::daily());

    assert_occurs_exactly_on(&event, date(2024, 2, 1), 60, |day| day >= anchor);
}

#[test]
fn monthly_event_keeps_day_of_month() {
    let anchor = date(2024, 1, 15);
    let event = test_recurring_event("rent", "2024-01-15T08:00", None, Recurrence::monthly());

    assert_occurs_exactly_on(&event, date(2023, 12, 1), 400, |day| {
        day >= anchor && day.day() == 15
    });
}

#[test]
fn custom_three_days_matches_first_occurrences() {
    let event = test_recurring_event(
        "water plants",
        "2024-01-01T09:00",
        None,
        Recurrence::custom(3, RecurrenceUnit::Days),
    );

    let hits: Vec<_> = (0..10)
        .map(|i| date(2024, 1, 1) + Days::new(i))
        .filter(|day| occurs_on(&event, *day))
        .collect();
    assert_eq!(
        hits,
        vec![
            date(2024, 1, 1),
            date(2024, 1, 4),
            date(2024, 1, 7),
            date(2024, 1, 10)
        ]
    );
}

#[test]
fn custom_weeks_respects_step_cap() {
    let event = test_recurring_event(
        "sprint",
        "2024-01-01T09:00",
        None,
        Recurrence::custom(2, RecurrenceUnit::Weeks),
    );

    // step 99 is the last one reached
    let last = date(2024, 1, 1) + Days::new(99 * 14);
    assert!(occurs_on(&event, last));
    assert!(!occurs_on(&event, last + Days::new(14)));
    assert!(RecurrenceResolver::new(200).occurs_on(&event, last + Days::new(14)));
}

#[test]
fn custom_without_interval_and_unit_is_weekly() {
    let mut recurrence = Recurrence::custom(1, RecurrenceUnit::Weeks);
    recurrence.interval = None;
    recurrence.unit = None;
    let event = test_recurring_event("sync", "2024-01-01T09:00", None, recurrence);

    assert!(occurs_on(&event, date(2024, 1, 8)));
    assert!(!occurs_on(&event, date(2024, 1, 2)));
}
