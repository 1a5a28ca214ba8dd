// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calgrid_core::{ConflictReport, Event, EventForm, EventId, EventPatch, EventStore};
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::{CommonArgs, EventArgs, EventFields};
use crate::event_formatter::{EventFormatter, EventRow};
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub form: EventForm,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new event")
            .arg(EventArgs::title(true))
            .arg(EventArgs::date(true))
            .arg(EventArgs::time(true))
            .arg(EventArgs::end())
            .arg(EventArgs::description())
            .arg(EventArgs::color())
            .arg(EventArgs::repeat())
            .arg(EventArgs::interval())
            .arg(EventArgs::unit())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            form: EventFields::from(matches).apply_to(EventForm::default()),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self, store: &mut EventStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let draft = self.form.validate()?;
        let (event, report) = store.add(draft);
        print_report(&report, self.output_format, self.verbose);
        print_events(&[event], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: EventId,
    pub fields: EventFields,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event, fields not given are kept")
            .arg(EventArgs::id())
            .arg(EventArgs::title(false))
            .arg(EventArgs::date(false))
            .arg(EventArgs::time(false))
            .arg(EventArgs::end())
            .arg(EventArgs::description())
            .arg(EventArgs::color())
            .arg(EventArgs::repeat())
            .arg(EventArgs::interval())
            .arg(EventArgs::unit())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: EventArgs::get_id(matches).ok_or("Event id is required")?,
            fields: EventFields::from(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        })
    }

    pub fn run(self, store: &mut EventStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        let event = store
            .get(&self.id)
            .ok_or_else(|| calgrid_core::Error::NotFound(self.id.clone()))?;

        let form = self.fields.apply_to(EventForm::from_event(event));
        let patch: EventPatch = form.validate()?.into();
        let (event, report) = store.update(&self.id, patch)?;
        print_report(&report, self.output_format, self.verbose);
        print_events(&[event], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub ids: Vec<EventId>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete events")
            .arg(EventArgs::ids())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: EventArgs::get_ids(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self, store: &mut EventStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(ids = ?self.ids, "deleting events...");
        // check all ids first so a typo deletes nothing
        if let Some(missing) = self.ids.iter().find(|id| store.get(id).is_none()) {
            return Err(calgrid_core::Error::NotFound(missing.clone()).into());
        }

        let mut deleted = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            deleted.push(store.delete(id)?);
        }
        print_events(&deleted, self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventCheck {
    pub form: EventForm,
    pub exclude: Option<EventId>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventCheck {
    pub const NAME: &str = "check";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check an event for conflicts without saving it")
            .arg(EventArgs::date(true))
            .arg(EventArgs::time(true))
            .arg(EventArgs::end())
            .arg(EventArgs::repeat())
            .arg(EventArgs::interval())
            .arg(EventArgs::unit())
            .arg(EventArgs::exclude())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let base = EventForm {
            title: "candidate".to_string(),
            ..Default::default()
        };
        Self {
            form: EventFields::from(matches).apply_to(base),
            exclude: EventArgs::get_exclude(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self, store: &EventStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking event...");
        let draft = self.form.validate()?;
        let report = store.check(&draft, self.exclude.as_ref());

        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Table if report.is_empty() => println!("{}", "No conflicts".green()),
            OutputFormat::Table => print_report(&report, self.output_format, self.verbose),
        }
        Ok(())
    }
}

/// Prints a non-empty report as a warning, conflicts never block a change.
fn print_report(report: &ConflictReport, output_format: OutputFormat, verbose: bool) {
    if report.is_empty() {
        return;
    }

    // keep stdout machine readable
    if output_format == OutputFormat::Json {
        eprintln!("{} {}", "Warning:".yellow(), report);
        return;
    }

    println!("{} {}", "Warning:".yellow(), report);
    if !report.conflicts.is_empty() {
        let rows: Vec<_> = report.conflicts.iter().map(EventRow::conflicted).collect();
        let formatter = EventFormatter::new(verbose).with_date().with_conflict();
        println!("{}", formatter.format(&rows));
    }
}

fn print_events(events: &[Event], output_format: OutputFormat, verbose: bool) {
    let rows: Vec<_> = events.iter().map(EventRow::anchor).collect();
    let formatter = EventFormatter::new(verbose)
        .with_date()
        .with_output_format(output_format);
    println!("{}", formatter.format(&rows));
}
