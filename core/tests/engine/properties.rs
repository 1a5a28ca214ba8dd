// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Invariants checked over generated events and intervals.

use chrono::{Datelike, Days, NaiveDateTime, TimeDelta, Weekday};
use proptest::prelude::*;

use calgrid_core::{
    Event, EventDraft, Interval, Recurrence, RecurrenceUnit, find_conflicts,
    find_recurring_conflicts, occurs_on, overlaps,
};

use crate::common::{date, test_event};

/// Any minute of roughly ten years from 2000-01-03, a Monday.
fn instant() -> impl Strategy<Value = NaiveDateTime> {
    (0u64..3_650, 0u32..24, 0u32..60).prop_map(|(days, h, m)| {
        (date(2000, 1, 3) + Days::new(days))
            .and_hms_opt(h, m, 0)
            .unwrap()
    })
}

/// Start and end in any order, so reversed and empty intervals are included.
fn interval() -> impl Strategy<Value = Interval> {
    (instant(), instant()).prop_map(|(start, end)| Interval::new(start, end))
}

fn any_recurrence() -> impl Strategy<Value = Option<Recurrence>> {
    prop_oneof![
        Just(None),
        Just(Some(Recurrence::daily())),
        Just(Some(Recurrence::weekly())),
        Just(Some(Recurrence::monthly())),
        (1i64..5, 0usize..3).prop_map(|(interval, unit)| {
            let unit = [RecurrenceUnit::Days, RecurrenceUnit::Weeks, RecurrenceUnit::Months][unit];
            Some(Recurrence::custom(interval, unit))
        }),
    ]
}

fn stored_event(
    id: &str,
    start: NaiveDateTime,
    minutes: Option<i64>,
    recurrence: Option<Recurrence>,
) -> Event {
    let date = start.format("%Y-%m-%dT%H:%M").to_string();
    let end = minutes.map(|m| (start + TimeDelta::minutes(m)).format("%H:%M").to_string());
    let mut event = test_event(id, &date, end.as_deref());
    event.recurrence = recurrence;
    event
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in interval(), b in interval()) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn interval_never_overlaps_its_successor(start in instant(), minutes in 1i64..600) {
        let end = start + TimeDelta::minutes(minutes);
        let first = Interval::new(start, end);
        let next = Interval::new(end, end + TimeDelta::minutes(minutes));
        prop_assert!(!overlaps(&first, &next));
    }

    #[test]
    fn one_time_event_occurs_only_on_anchor(
        anchor in instant(),
        days in prop::collection::vec(0u64..7_300, 1000),
    ) {
        let event = EventDraft::new("once", anchor);
        prop_assert!(occurs_on(&event, anchor.date()));
        for offset in days {
            let day = date(1995, 1, 1) + Days::new(offset);
            prop_assert_eq!(occurs_on(&event, day), day == anchor.date(), "day {}", day);
        }
    }

    #[test]
    fn weekly_event_occurs_on_mondays_after_anchor(
        weeks in 0u64..500,
        offsets in prop::collection::vec(-730i64..730, 100),
    ) {
        let anchor = date(2000, 1, 3) + Days::new(weeks * 7);
        let start = anchor.and_hms_opt(9, 0, 0).unwrap();
        let event = EventDraft::new("weekly", start).with_recurrence(Recurrence::weekly());

        for offset in offsets {
            let day = anchor + TimeDelta::days(offset);
            let expected = day >= anchor && day.weekday() == Weekday::Mon;
            prop_assert_eq!(occurs_on(&event, day), expected, "day {}", day);
        }
    }

    #[test]
    fn edited_event_never_conflicts_with_itself(
        start in instant(),
        minutes in prop::option::of(15i64..600),
        recurrence in any_recurrence(),
        others in prop::collection::vec((instant(), prop::option::of(15i64..600)), 0..8),
        position in 0usize..8,
    ) {
        let mut events: Vec<Event> = others
            .iter()
            .enumerate()
            .map(|(i, (start, minutes))| stored_event(&format!("other-{i}"), *start, *minutes, None))
            .collect();
        let without_self = events.clone();

        let edited = stored_event("edited", start, minutes, recurrence);
        events.insert(position.min(events.len()), edited.clone());
        let candidate = edited.draft();

        let conflicts = find_conflicts(&events, &candidate, Some(&edited.id));
        prop_assert!(conflicts.iter().all(|c| c.event.id != edited.id));
        prop_assert_eq!(conflicts, find_conflicts(&without_self, &candidate, None));
        prop_assert_eq!(
            find_recurring_conflicts(&events, &candidate, Some(&edited.id)),
            find_recurring_conflicts(&without_self, &candidate, None)
        );
    }
}
