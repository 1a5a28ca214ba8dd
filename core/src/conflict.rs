// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::interval::{materialize, materialize_anchor};
use crate::{Event, EventId, Interval, RecurrenceResolver, Schedule};

/// How a candidate's interval relates to an existing event's interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// The candidate lies entirely within the existing event.
    Contained,

    /// The existing event lies entirely within the candidate.
    Contains,

    /// The candidate starts first and runs into the existing event.
    OverlapsStart,

    /// Any other overlap.
    OverlapsEnd,
}

impl AsRef<str> for ConflictType {
    fn as_ref(&self) -> &str {
        match self {
            ConflictType::Contained => "contained",
            ConflictType::Contains => "contains",
            ConflictType::OverlapsStart => "overlaps_start",
            ConflictType::OverlapsEnd => "overlaps_end",
        }
    }
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// Classifies an overlap, the first matching rule wins.
pub fn classify(candidate: &Interval, existing: &Interval) -> ConflictType {
    if existing.contains(candidate) {
        ConflictType::Contained
    } else if candidate.contains(existing) {
        ConflictType::Contains
    } else if candidate.start < existing.start && candidate.end > existing.start {
        ConflictType::OverlapsStart
    } else {
        ConflictType::OverlapsEnd
    }
}

/// An existing event overlapping the candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub conflict_type: ConflictType,
}

/// Advisory summary of the conflicts of one candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConflictReport {
    /// Events whose anchor-date occurrence overlaps the candidate's.
    pub conflicts: Vec<ConflictedEvent>,

    /// Whether a recurring event occurs on the candidate's date at an overlapping time.
    pub recurring: bool,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty() && !self.recurring
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no conflicts");
        }

        write!(f, "conflicts with")?;
        let n = self.conflicts.len();
        if n > 0 {
            let plural = if n == 1 { "" } else { "s" };
            write!(f, " {n} existing event{plural}")?;
            if self.recurring {
                write!(f, " and")?;
            }
        }
        if self.recurring {
            write!(f, " recurring events")?;
        }
        Ok(())
    }
}

/// Queries an event collection for occurrences and conflicts.
///
/// Holds no event state, every query works on the slice it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictDetector {
    resolver: RecurrenceResolver,
}

impl ConflictDetector {
    pub fn new(resolver: RecurrenceResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &RecurrenceResolver {
        &self.resolver
    }

    /// The events occurring on `day`, in collection order.
    pub fn events_on_day<'a>(&self, events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
        events
            .iter()
            .filter(|event| match event.is_recurring() {
                true => self.resolver.occurs_on(*event, day),
                false => event.anchor_date() == day,
            })
            .collect()
    }

    /// Events whose anchor-date occurrence overlaps the candidate's anchor-date occurrence.
    ///
    /// NOTE: only the anchor date of each side is compared, later occurrences of recurring
    /// events are covered by [`Self::find_recurring_conflicts`].
    pub fn find_conflicts(
        &self,
        events: &[Event],
        candidate: &impl Schedule,
        exclude: Option<&EventId>,
    ) -> Vec<ConflictedEvent> {
        let wanted = materialize_anchor(candidate);
        events
            .iter()
            .filter(|event| Some(&event.id) != exclude)
            .filter_map(|event| {
                let existing = materialize_anchor(event);
                wanted.overlaps(&existing).then(|| ConflictedEvent {
                    event: event.clone(),
                    conflict_type: classify(&wanted, &existing),
                })
            })
            .collect()
    }

    /// Whether a recurring event occurs on the candidate's anchor date at an overlapping
    /// time of day.
    pub fn find_recurring_conflicts(
        &self,
        events: &[Event],
        candidate: &impl Schedule,
        exclude: Option<&EventId>,
    ) -> bool {
        let wanted = materialize_anchor(candidate);
        let day = candidate.anchor_date();
        let (start, end) = wanted.time_of_day_range();
        events
            .iter()
            .filter(|event| Some(&event.id) != exclude && event.is_recurring())
            .any(|event| {
                if !self.resolver.occurs_on(event, day) {
                    return false;
                }

                let (existing_start, existing_end) = materialize(event, day).time_of_day_range();
                start < existing_end && end > existing_start
            })
    }

    /// Both conflict checks for one candidate.
    pub fn check(
        &self,
        events: &[Event],
        candidate: &impl Schedule,
        exclude: Option<&EventId>,
    ) -> ConflictReport {
        ConflictReport {
            conflicts: self.find_conflicts(events, candidate, exclude),
            recurring: self.find_recurring_conflicts(events, candidate, exclude),
        }
    }
}

/// The events occurring on `day`, in collection order.
pub fn events_on_day(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    ConflictDetector::default().events_on_day(events, day)
}

/// Events whose anchor-date occurrence overlaps the candidate's.
pub fn find_conflicts(
    events: &[Event],
    candidate: &impl Schedule,
    exclude: Option<&EventId>,
) -> Vec<ConflictedEvent> {
    ConflictDetector::default().find_conflicts(events, candidate, exclude)
}

/// Whether a recurring event collides with the candidate on its anchor date.
pub fn find_recurring_conflicts(
    events: &[Event],
    candidate: &impl Schedule,
    exclude: Option<&EventId>,
) -> bool {
    ConflictDetector::default().find_recurring_conflicts(events, candidate, exclude)
}
