// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::time::{serde_date_time, serde_opt_time};

/// The color given to events created without one.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Anything that can be placed on the calendar: stored events and candidates alike.
pub trait Schedule {
    /// The start of the first occurrence. Its date is the anchor date.
    fn anchor(&self) -> NaiveDateTime;

    /// The end time of every occurrence, if set.
    fn end_time(&self) -> Option<NaiveTime>;

    /// The recurrence rule, `None` for one-time events.
    fn recurrence(&self) -> Option<&Recurrence>;

    /// The calendar date of the first occurrence.
    fn anchor_date(&self) -> NaiveDate {
        self.anchor().date()
    }

    /// Whether a recurrence rule other than `none` is set.
    fn is_recurring(&self) -> bool {
        self.recurrence()
            .is_some_and(|r| r.kind != RecurrenceKind::None)
    }
}

/// The unique identifier of an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Generates a fresh identifier.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A calendar event as stored in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Stable for the lifetime of the event, never reused.
    pub id: EventId,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// The start of the first occurrence.
    #[serde(with = "serde_date_time")]
    pub date: NaiveDateTime,

    /// The end time of every occurrence. One hour after the start when absent.
    #[serde(default, with = "serde_opt_time")]
    pub end_time: Option<NaiveTime>,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default, deserialize_with = "deserialize_recurrence")]
    pub recurrence: Option<Recurrence>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// A candidate built from this event's own fields, as an edit form would.
    pub fn draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date,
            end_time: self.end_time,
            color: self.color.clone(),
            recurrence: self.recurrence.clone(),
        }
    }
}

impl Schedule for Event {
    fn anchor(&self) -> NaiveDateTime {
        self.date
    }

    fn end_time(&self) -> Option<NaiveTime> {
        self.end_time
    }

    fn recurrence(&self) -> Option<&Recurrence> {
        self.recurrence.as_ref()
    }
}

/// Draft for an event, used for creating new events and as a conflict candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub end_time: Option<NaiveTime>,
    pub color: String,
    pub recurrence: Option<Recurrence>,
}

impl EventDraft {
    /// Creates a one-time draft with no end time and the default color.
    pub fn new(title: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            date,
            end_time: None,
            color: DEFAULT_COLOR.to_string(),
            recurrence: None,
        }
    }

    pub fn with_end_time(mut self, end_time: NaiveTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = Some(recurrence);
        self
    }

    pub(crate) fn into_event(self, id: EventId, created_at: DateTime<Utc>) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            end_time: self.end_time,
            color: self.color,
            recurrence: self.recurrence,
            created_at,
        }
    }
}

impl Schedule for EventDraft {
    fn anchor(&self) -> NaiveDateTime {
        self.date
    }

    fn end_time(&self) -> Option<NaiveTime> {
        self.end_time
    }

    fn recurrence(&self) -> Option<&Recurrence> {
        self.recurrence.as_ref()
    }
}

/// Patch for an event, allowing partial updates.
#[derive(Debug, Default, Clone)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub end_time: Option<Option<NaiveTime>>,
    pub color: Option<String>,
    pub recurrence: Option<Option<Recurrence>>,
}

impl EventPatch {
    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.end_time.is_none()
            && self.color.is_none()
            && self.recurrence.is_none()
    }

    /// Applies the patch to a mutable event, modifying it in place.
    pub fn apply_to<'a>(&self, e: &'a mut Event) -> &'a mut Event {
        if let Some(title) = &self.title {
            e.title.clone_from(title);
        }

        if let Some(description) = &self.description {
            e.description.clone_from(description);
        }

        if let Some(date) = self.date {
            e.date = date;
        }

        if let Some(end_time) = self.end_time {
            e.end_time = end_time;
        }

        if let Some(color) = &self.color {
            e.color.clone_from(color);
        }

        if let Some(recurrence) = &self.recurrence {
            e.recurrence.clone_from(recurrence);
        }

        e
    }
}

impl From<EventDraft> for EventPatch {
    /// A patch replacing every field with the draft's.
    fn from(draft: EventDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            date: Some(draft.date),
            end_time: Some(draft.end_time),
            color: Some(draft.color),
            recurrence: Some(draft.recurrence),
        }
    }
}

/// How an event repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    #[serde(rename = "type")]
    pub kind: RecurrenceKind,

    /// Step count for custom recurrences, 1 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,

    /// Step unit for custom recurrences, weeks when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<RecurrenceUnit>,
}

impl Recurrence {
    pub fn daily() -> Self {
        Self::of(RecurrenceKind::Daily)
    }

    pub fn weekly() -> Self {
        Self::of(RecurrenceKind::Weekly)
    }

    pub fn monthly() -> Self {
        Self::of(RecurrenceKind::Monthly)
    }

    /// Every `interval` `unit`s from the anchor date.
    pub fn custom(interval: i64, unit: RecurrenceUnit) -> Self {
        Self {
            kind: RecurrenceKind::Custom,
            interval: Some(interval),
            unit: Some(unit),
        }
    }

    fn of(kind: RecurrenceKind) -> Self {
        Self {
            kind,
            interval: None,
            unit: None,
        }
    }

    /// The custom step count, defaulting to 1.
    pub fn custom_interval(&self) -> i64 {
        self.interval.unwrap_or(1)
    }

    /// The custom step unit, defaulting to weeks.
    pub fn custom_unit(&self) -> RecurrenceUnit {
        self.unit.unwrap_or(RecurrenceUnit::Weeks)
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RecurrenceKind::Custom => {
                write!(f, "every {} {}", self.custom_interval(), self.custom_unit())
            }
            kind => write!(f, "{kind}"),
        }
    }
}

/// A stored `{"type": "none"}` means the event does not repeat.
fn deserialize_recurrence<'de, D>(deserializer: D) -> Result<Option<Recurrence>, D::Error>
where
    D: Deserializer<'de>,
{
    let recurrence = Option::<Recurrence>::deserialize(deserializer)?;
    Ok(recurrence.filter(|r| r.kind != RecurrenceKind::None))
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// The kind of a recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    /// Does not repeat.
    None,

    /// Every day on or after the anchor date.
    Daily,

    /// Every week on the anchor's weekday.
    Weekly,

    /// Every month on the anchor's day of month.
    Monthly,

    /// Every `interval` `unit`s.
    Custom,

    /// A type this version does not know, never occurs.
    #[serde(other)]
    #[cfg_attr(feature = "clap", value(skip))]
    Unrecognized,
}

const KIND_NONE: &str = "none";
const KIND_DAILY: &str = "daily";
const KIND_WEEKLY: &str = "weekly";
const KIND_MONTHLY: &str = "monthly";
const KIND_CUSTOM: &str = "custom";
const UNRECOGNIZED: &str = "unrecognized";

impl AsRef<str> for RecurrenceKind {
    fn as_ref(&self) -> &str {
        match self {
            RecurrenceKind::None => KIND_NONE,
            RecurrenceKind::Daily => KIND_DAILY,
            RecurrenceKind::Weekly => KIND_WEEKLY,
            RecurrenceKind::Monthly => KIND_MONTHLY,
            RecurrenceKind::Custom => KIND_CUSTOM,
            RecurrenceKind::Unrecognized => UNRECOGNIZED,
        }
    }
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for RecurrenceKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            KIND_NONE => Ok(RecurrenceKind::None),
            KIND_DAILY => Ok(RecurrenceKind::Daily),
            KIND_WEEKLY => Ok(RecurrenceKind::Weekly),
            KIND_MONTHLY => Ok(RecurrenceKind::Monthly),
            KIND_CUSTOM => Ok(RecurrenceKind::Custom),
            _ => Err(()),
        }
    }
}

/// The step unit of a custom recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceUnit {
    Days,
    Weeks,
    Months,

    /// A unit this version does not know, never occurs.
    #[serde(other)]
    #[cfg_attr(feature = "clap", value(skip))]
    Unrecognized,
}

const UNIT_DAYS: &str = "days";
const UNIT_WEEKS: &str = "weeks";
const UNIT_MONTHS: &str = "months";

impl AsRef<str> for RecurrenceUnit {
    fn as_ref(&self) -> &str {
        match self {
            RecurrenceUnit::Days => UNIT_DAYS,
            RecurrenceUnit::Weeks => UNIT_WEEKS,
            RecurrenceUnit::Months => UNIT_MONTHS,
            RecurrenceUnit::Unrecognized => UNRECOGNIZED,
        }
    }
}

impl fmt::Display for RecurrenceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for RecurrenceUnit {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            UNIT_DAYS => Ok(RecurrenceUnit::Days),
            UNIT_WEEKS => Ok(RecurrenceUnit::Weeks),
            UNIT_MONTHS => Ok(RecurrenceUnit::Months),
            _ => Err(()),
        }
    }
}
