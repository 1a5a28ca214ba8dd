// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use chrono::{Days, NaiveDate};

use calgrid_core::{ConflictType, ConflictedEvent, Schedule, occurs_on};

/// Asserts that `event` occurs on exactly the dates `expected` within `days` days of `from`.
///
/// # Panics
///
/// Panics on the first date where the resolver disagrees with `expected`.
pub fn assert_occurs_exactly_on(
    event: &impl Schedule,
    from: NaiveDate,
    days: u64,
    expected: impl Fn(NaiveDate) -> bool,
) {
    for offset in 0..days {
        let day = from + Days::new(offset);
        assert_eq!(occurs_on(event, day), expected(day), "mismatch on {day}");
    }
}

/// Asserts the ids and conflict types of a conflict list, in order.
pub fn assert_conflict_types(conflicts: &[ConflictedEvent], expected: &[(&str, ConflictType)]) {
    let actual: Vec<_> = conflicts
        .iter()
        .map(|c| (c.event.id.as_str(), c.conflict_type))
        .collect();
    assert_eq!(actual, expected, "Conflict list mismatch");
}
