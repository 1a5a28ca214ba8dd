// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::{Schedule, TimeOfDay};

/// The duration of an event without an end time.
pub const DEFAULT_DURATION: TimeDelta = TimeDelta::hours(1);

/// The concrete start and end of one occurrence.
///
/// NOTE: `end` may precede `start` when an event's end time is earlier than its start time,
/// rejecting such events is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Half-open overlap, intervals sharing only a boundary instant do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within this interval, boundaries included.
    pub fn contains(&self, other: &Interval) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// The start and end as times of day, ignoring dates.
    pub fn time_of_day_range(&self) -> (TimeOfDay, TimeOfDay) {
        (self.start.into(), self.end.into())
    }
}

/// Places an event's start and end time on `day`.
///
/// Does not check whether `day` is an occurrence of the event.
pub fn materialize(event: &impl Schedule, day: NaiveDate) -> Interval {
    let start = NaiveDateTime::new(day, event.anchor().time());
    let end = match event.end_time() {
        Some(end_time) => NaiveDateTime::new(day, end_time),
        None => start + DEFAULT_DURATION,
    };
    Interval { start, end }
}

/// Places an event on its own anchor date.
pub fn materialize_anchor(event: &impl Schedule) -> Interval {
    materialize(event, event.anchor_date())
}

/// Half-open overlap of two intervals.
pub fn overlaps(a: &Interval, b: &Interval) -> bool {
    a.overlaps(b)
}
