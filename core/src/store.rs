// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, Utc};

use crate::{
    ConflictDetector, ConflictReport, Error, Event, EventDraft, EventId, EventPatch, Schedule,
};

/// An in-memory event collection with advisory conflict checking.
///
/// Conflicts never block a write, they are reported back to the caller alongside the
/// stored event.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    detector: ConflictDetector,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detector(events: Vec<Event>, detector: ConflictDetector) -> Self {
        Self { events, detector }
    }

    pub fn detector(&self) -> &ConflictDetector {
        &self.detector
    }

    /// Stores a new event, reporting what it conflicts with.
    #[tracing::instrument(skip_all, fields(title = %draft.title))]
    pub fn add(&mut self, draft: EventDraft) -> (Event, ConflictReport) {
        let report = self.detector.check(&self.events, &draft, None);
        let event = draft.into_event(EventId::generate(), Utc::now());
        log_report(&event.id, &report);

        tracing::info!(id = %event.id, "event added");
        self.events.push(event.clone());
        (event, report)
    }

    /// Applies a patch to an existing event, ignoring the event itself when checking.
    #[tracing::instrument(skip(self, patch))]
    pub fn update(
        &mut self,
        id: &EventId,
        patch: EventPatch,
    ) -> Result<(Event, ConflictReport), Error> {
        let index = self.position(id)?;

        let mut event = self.events[index].clone();
        patch.apply_to(&mut event);
        let report = self.detector.check(&self.events, &event, Some(id));
        log_report(id, &report);

        tracing::info!("event updated");
        self.events[index] = event.clone();
        Ok((event, report))
    }

    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, id: &EventId) -> Result<Event, Error> {
        let index = self.position(id)?;
        tracing::info!("event deleted");
        Ok(self.events.remove(index))
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_on_day(&self, day: NaiveDate) -> Vec<&Event> {
        self.detector.events_on_day(&self.events, day)
    }

    /// Checks a candidate without storing it.
    pub fn check(&self, candidate: &impl Schedule, exclude: Option<&EventId>) -> ConflictReport {
        self.detector.check(&self.events, candidate, exclude)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    fn position(&self, id: &EventId) -> Result<usize, Error> {
        self.events
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| Error::NotFound(id.clone()))
    }
}

impl From<Vec<Event>> for EventStore {
    fn from(events: Vec<Event>) -> Self {
        Self {
            events,
            detector: ConflictDetector::default(),
        }
    }
}

fn log_report(id: &EventId, report: &ConflictReport) {
    if !report.is_empty() {
        tracing::warn!(%id, conflicts = report.conflicts.len(), recurring = report.recurring, "{report}");
    }
}
