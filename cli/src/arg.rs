// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calgrid_core::{EventForm, EventId, RecurrenceKind, RecurrenceUnit};
use chrono::NaiveDate;
use clap::{Arg, ArgMatches, arg, value_parser};

use crate::util::{OutputFormat, YearMonth, parse_day, parse_month};

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn day() -> Arg {
        arg!(day: [DATE] "Date to show, YYYY-MM-DD, today, tomorrow or yesterday")
            .value_parser(parse_day)
    }

    pub fn get_day(matches: &ArgMatches) -> Option<NaiveDate> {
        matches.get_one("day").copied()
    }

    pub fn month() -> Arg {
        arg!(month: [MONTH] "Month to show, YYYY-MM").value_parser(parse_month)
    }

    pub fn get_month(matches: &ArgMatches) -> Option<YearMonth> {
        matches.get_one("month").copied()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the event")
    }

    pub fn get_id(matches: &ArgMatches) -> Option<EventId> {
        matches.get_one::<String>("id").map(|a| a.as_str().into())
    }

    pub fn ids() -> Arg {
        arg!(id: <ID> "The ids of the events").num_args(1..)
    }

    pub fn get_ids(matches: &ArgMatches) -> Vec<EventId> {
        matches
            .get_many::<String>("id")
            .map(|ids| ids.map(|a| a.as_str().into()).collect())
            .unwrap_or_default()
    }

    pub fn title(positional: bool) -> Arg {
        if positional {
            arg!(title: <TITLE> "Title of the event")
        } else {
            arg!(title: -t --title <TITLE> "Title of the event")
        }
    }

    pub fn get_title(matches: &ArgMatches) -> Option<String> {
        matches.get_one("title").cloned()
    }

    pub fn date(required: bool) -> Arg {
        arg!(-d --date <DATE> "Date of the first occurrence, YYYY-MM-DD").required(required)
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    pub fn time(required: bool) -> Arg {
        arg!(--time <TIME> "Start time, HH:MM").required(required)
    }

    pub fn get_time(matches: &ArgMatches) -> Option<String> {
        matches.get_one("time").cloned()
    }

    pub fn end() -> Arg {
        arg!(--end <TIME> "End time, HH:MM, empty to clear. Defaults to one hour after start")
    }

    pub fn get_end(matches: &ArgMatches) -> Option<String> {
        matches.get_one("end").cloned()
    }

    pub fn description() -> Arg {
        arg!(--description <DESCRIPTION> "Description of the event")
    }

    pub fn get_description(matches: &ArgMatches) -> Option<String> {
        matches.get_one("description").cloned()
    }

    pub fn color() -> Arg {
        arg!(--color <COLOR> "Display color, as #rrggbb")
    }

    pub fn get_color(matches: &ArgMatches) -> Option<String> {
        matches.get_one("color").cloned()
    }

    pub fn repeat() -> Arg {
        arg!(-r --repeat <REPEAT> "How the event repeats")
            .value_parser(value_parser!(RecurrenceKind))
    }

    pub fn get_repeat(matches: &ArgMatches) -> Option<RecurrenceKind> {
        matches.get_one("repeat").copied()
    }

    pub fn interval() -> Arg {
        arg!(--interval <N> "Step count of a custom recurrence")
            .value_parser(value_parser!(i64).range(1..))
    }

    pub fn get_interval(matches: &ArgMatches) -> Option<i64> {
        matches.get_one("interval").copied()
    }

    pub fn unit() -> Arg {
        arg!(--unit <UNIT> "Step unit of a custom recurrence")
            .value_parser(value_parser!(RecurrenceUnit))
    }

    pub fn get_unit(matches: &ArgMatches) -> Option<RecurrenceUnit> {
        matches.get_one("unit").copied()
    }

    pub fn exclude() -> Arg {
        arg!(--exclude <ID> "Ignore this event, e.g. the one being edited")
    }

    pub fn get_exclude(matches: &ArgMatches) -> Option<EventId> {
        matches.get_one::<String>("exclude").map(|a| a.as_str().into())
    }
}

/// The event fields given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub end: Option<String>,
    pub color: Option<String>,
    pub repeat: Option<RecurrenceKind>,
    pub interval: Option<i64>,
    pub unit: Option<RecurrenceUnit>,
}

impl EventFields {
    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: EventArgs::get_title(matches),
            description: EventArgs::get_description(matches),
            date: EventArgs::get_date(matches),
            time: EventArgs::get_time(matches),
            end: EventArgs::get_end(matches),
            color: EventArgs::get_color(matches),
            repeat: EventArgs::get_repeat(matches),
            interval: EventArgs::get_interval(matches),
            unit: EventArgs::get_unit(matches),
        }
    }

    /// Overrides the fields of `form` that were given.
    pub fn apply_to(&self, mut form: EventForm) -> EventForm {
        if let Some(title) = &self.title {
            form.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            form.description.clone_from(description);
        }
        if let Some(date) = &self.date {
            form.date.clone_from(date);
        }
        if let Some(time) = &self.time {
            form.time.clone_from(time);
        }
        if let Some(end) = &self.end {
            form.end_time.clone_from(end);
        }
        if let Some(color) = &self.color {
            form.color.clone_from(color);
        }
        if let Some(repeat) = self.repeat {
            form.recurrence = repeat.to_string();
        }
        if let Some(interval) = self.interval {
            form.interval = Some(interval);
        }
        if let Some(unit) = self.unit {
            form.unit = unit.to_string();
        }
        form
    }
}
