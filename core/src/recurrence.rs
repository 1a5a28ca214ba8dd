// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::{Recurrence, RecurrenceKind, RecurrenceUnit, Schedule};

/// The maximum number of steps taken from the anchor date when resolving a custom recurrence.
///
/// A target date that needs more steps than this is treated as not an occurrence.
pub const MAX_CUSTOM_STEPS: u32 = 100;

/// Decides whether an event occurs on a given calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceResolver {
    max_custom_steps: u32,
}

impl Default for RecurrenceResolver {
    fn default() -> Self {
        Self::new(MAX_CUSTOM_STEPS)
    }
}

impl RecurrenceResolver {
    /// Creates a resolver with the given cap on custom recurrence steps.
    pub const fn new(max_custom_steps: u32) -> Self {
        Self { max_custom_steps }
    }

    pub const fn max_custom_steps(&self) -> u32 {
        self.max_custom_steps
    }

    /// Whether `event` has an occurrence on `target`. Time of day is ignored.
    pub fn occurs_on(&self, event: &impl Schedule, target: NaiveDate) -> bool {
        let anchor = event.anchor_date();
        let Some(recurrence) = event.recurrence() else {
            return anchor == target;
        };

        match recurrence.kind {
            RecurrenceKind::Daily => target >= anchor,
            RecurrenceKind::Weekly => target >= anchor && target.weekday() == anchor.weekday(),
            RecurrenceKind::Monthly => target >= anchor && target.day() == anchor.day(),
            RecurrenceKind::Custom => self.custom_occurs_on(recurrence, anchor, target),
            RecurrenceKind::None => anchor == target,
            RecurrenceKind::Unrecognized => {
                tracing::debug!(%anchor, "unrecognized recurrence type, never occurs");
                false
            }
        }
    }

    /// Steps forward from the anchor until the target is matched or passed.
    fn custom_occurs_on(&self, recurrence: &Recurrence, anchor: NaiveDate, target: NaiveDate) -> bool {
        let interval = recurrence.custom_interval();
        let Ok(interval) = u32::try_from(interval) else {
            tracing::debug!(interval, "custom recurrence interval out of range, never occurs");
            return false;
        };
        if interval == 0 {
            tracing::debug!("custom recurrence interval is zero, never occurs");
            return false;
        }

        let unit = recurrence.custom_unit();
        if unit == RecurrenceUnit::Unrecognized {
            tracing::debug!("custom recurrence unit is unrecognized, never occurs");
            return false;
        }

        let mut current = anchor;
        for _ in 0..self.max_custom_steps {
            if current == target {
                return true;
            } else if current > target {
                return false;
            }

            current = match step(current, interval, unit) {
                Some(next) => next,
                None => {
                    tracing::debug!(%current, %unit, "custom recurrence cannot step further");
                    return false;
                }
            };
        }

        tracing::debug!(%anchor, %target, max = self.max_custom_steps, "custom recurrence step cap reached");
        false
    }
}

/// Moves `date` forward by `interval` `unit`s, months are clamped to the last valid day.
fn step(date: NaiveDate, interval: u32, unit: RecurrenceUnit) -> Option<NaiveDate> {
    match unit {
        RecurrenceUnit::Days => date.checked_add_days(Days::new(interval.into())),
        RecurrenceUnit::Weeks => date.checked_add_days(Days::new(u64::from(interval) * 7)),
        RecurrenceUnit::Months => date.checked_add_months(Months::new(interval)),
        RecurrenceUnit::Unrecognized => None,
    }
}

/// Whether `event` has an occurrence on `target`, using the default step cap.
pub fn occurs_on(event: &impl Schedule, target: NaiveDate) -> bool {
    RecurrenceResolver::default().occurs_on(event, target)
}
