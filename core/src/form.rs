// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Validation of user-entered event fields.
//!
//! These are the acceptance gates an event passes before it reaches the store or the
//! conflict detector: a title, a date and a start time are required, and an end time
//! must come after the start time.

use chrono::NaiveDateTime;

use crate::time::{STABLE_FORMAT_DATE, STABLE_FORMAT_TIME, parse_date, parse_time};
use crate::{DEFAULT_COLOR, Event, EventDraft, Recurrence, RecurrenceKind, RecurrenceUnit};

/// Raw event fields as entered by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub description: String,

    /// Date in the form `YYYY-MM-DD`.
    pub date: String,

    /// Start time in the form `HH:MM`.
    pub time: String,

    /// Optional end time in the form `HH:MM`, empty for none.
    pub end_time: String,

    /// Empty for the default color.
    pub color: String,

    /// One of `none`, `daily`, `weekly`, `monthly` or `custom`, empty for none.
    pub recurrence: String,

    /// Custom recurrence interval, 1 when absent.
    pub interval: Option<i64>,

    /// Custom recurrence unit, `weeks` when empty.
    pub unit: String,
}

impl EventForm {
    /// Prefills a form from an existing event, for editing.
    pub fn from_event(event: &Event) -> Self {
        let recurrence = event.recurrence.as_ref();
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date.format(STABLE_FORMAT_DATE).to_string(),
            time: event.date.format(STABLE_FORMAT_TIME).to_string(),
            end_time: event
                .end_time
                .map(|t| t.format(STABLE_FORMAT_TIME).to_string())
                .unwrap_or_default(),
            color: event.color.clone(),
            recurrence: recurrence
                .map(|r| r.kind.to_string())
                .unwrap_or_else(|| RecurrenceKind::None.to_string()),
            interval: recurrence.and_then(|r| r.interval),
            unit: recurrence
                .and_then(|r| r.unit)
                .map(|u| u.to_string())
                .unwrap_or_default(),
        }
    }

    /// Checks every field and builds a draft, collecting all failures.
    pub fn validate(&self) -> Result<EventDraft, FormErrors> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(FormError::TitleRequired);
        }

        let date = match self.date.trim() {
            "" => {
                errors.push(FormError::DateRequired);
                None
            }
            s => parse_date(s).or_else(|| {
                errors.push(FormError::InvalidDate(s.to_string()));
                None
            }),
        };

        let time = match self.time.trim() {
            "" => {
                errors.push(FormError::TimeRequired);
                None
            }
            s => parse_time(s).or_else(|| {
                errors.push(FormError::InvalidTime(s.to_string()));
                None
            }),
        };

        let end_time = match self.end_time.trim() {
            "" => None,
            s => parse_time(s).or_else(|| {
                errors.push(FormError::InvalidEndTime(s.to_string()));
                None
            }),
        };

        if let (Some(start), Some(end)) = (time, end_time)
            && start >= end
        {
            errors.push(FormError::EndNotAfterStart);
        }

        let recurrence = match self.recurrence() {
            Ok(recurrence) => recurrence,
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match (date, time) {
            (Some(date), Some(time)) if errors.is_empty() => Ok(EventDraft {
                title: title.to_string(),
                description: self.description.trim().to_string(),
                date: NaiveDateTime::new(date, time),
                end_time,
                color: match self.color.trim() {
                    "" => DEFAULT_COLOR.to_string(),
                    color => color.to_string(),
                },
                recurrence,
            }),
            _ => Err(FormErrors(errors)),
        }
    }

    fn recurrence(&self) -> Result<Option<Recurrence>, FormError> {
        let kind = match self.recurrence.trim() {
            "" => RecurrenceKind::None,
            s => s
                .parse()
                .map_err(|_| FormError::InvalidRecurrence(s.to_string()))?,
        };

        Ok(match kind {
            RecurrenceKind::None => None,
            RecurrenceKind::Custom => {
                let interval = self.interval.unwrap_or(1);
                if interval < 1 {
                    return Err(FormError::InvalidInterval(interval));
                }

                let unit = match self.unit.trim() {
                    "" => RecurrenceUnit::Weeks,
                    s => s
                        .parse()
                        .map_err(|_| FormError::InvalidUnit(s.to_string()))?,
                };
                Some(Recurrence::custom(interval, unit))
            }
            kind => Some(Recurrence {
                kind,
                interval: None,
                unit: None,
            }),
        })
    }
}

/// A single rejected field.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Date is required")]
    DateRequired,

    #[error("Time is required")]
    TimeRequired,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid end time '{0}', expected HH:MM")]
    InvalidEndTime(String),

    #[error("End time must be after start time")]
    EndNotAfterStart,

    #[error("Unknown recurrence '{0}'")]
    InvalidRecurrence(String),

    #[error("Unknown recurrence unit '{0}'")]
    InvalidUnit(String),

    #[error("Recurrence interval must be at least 1, got {0}")]
    InvalidInterval(i64),
}

/// All rejected fields of one form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_messages(.0))]
pub struct FormErrors(Vec<FormError>);

impl FormErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FormError> {
        self.0.iter()
    }

    pub fn contains(&self, error: &FormError) -> bool {
        self.0.contains(error)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn join_messages(errors: &[FormError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
