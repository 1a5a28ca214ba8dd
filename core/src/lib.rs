// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence resolution, occurrence materialization and conflict detection for
//! calendar events.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod config;
mod conflict;
mod error;
mod event;
mod form;
mod interval;
mod recurrence;
mod store;
pub mod time;

pub use crate::config::{APP_NAME, Config, expand_path, get_config_dir};
pub use crate::conflict::{
    ConflictDetector, ConflictReport, ConflictType, ConflictedEvent, classify, events_on_day,
    find_conflicts, find_recurring_conflicts,
};
pub use crate::error::Error;
pub use crate::event::{
    DEFAULT_COLOR, Event, EventDraft, EventId, EventPatch, Recurrence, RecurrenceKind,
    RecurrenceUnit, Schedule,
};
pub use crate::form::{EventForm, FormError, FormErrors};
pub use crate::interval::{DEFAULT_DURATION, Interval, materialize, materialize_anchor, overlaps};
pub use crate::recurrence::{MAX_CUSTOM_STEPS, RecurrenceResolver, occurs_on};
pub use crate::store::EventStore;
pub use crate::time::TimeOfDay;
