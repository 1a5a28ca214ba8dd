// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calgrid_core::{Event, EventStore};
use chrono::{Datelike, NaiveDate, Weekday};
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::CommonArgs;
use crate::event_formatter::{EventFormatter, EventRow};
use crate::util::{OutputFormat, YearMonth, format_date, today};

#[derive(Debug, Clone, Copy)]
pub struct CmdMonth {
    pub month: Option<YearMonth>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("m")
            .about("Show the events of a month, week by week")
            .arg(CommonArgs::month())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: CommonArgs::get_month(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self, store: &EventStore) -> Result<(), Box<dyn Error>> {
        let month = self.month.unwrap_or_else(|| YearMonth::of(today()));
        tracing::debug!(?month, "listing events of month...");

        let days = calendar_days(month).ok_or("Month out of range")?;
        let grid: Vec<(NaiveDate, Vec<&Event>)> = days
            .into_iter()
            .map(|day| (day, store.events_on_day(day)))
            .collect();

        match self.output_format {
            OutputFormat::Json => {
                let rows: Vec<_> = grid
                    .iter()
                    .flat_map(|(day, events)| events.iter().map(|e| EventRow::on(e, *day)))
                    .collect();
                let formatter = EventFormatter::new(self.verbose)
                    .with_date()
                    .with_output_format(self.output_format);
                println!("{}", formatter.format(&rows));
            }
            OutputFormat::Table => {
                let formatter = EventFormatter::new(self.verbose);
                let mut first_week = true;
                for week in grid.chunks(7) {
                    if week.iter().all(|(_, events)| events.is_empty()) {
                        continue;
                    }
                    if !first_week {
                        println!();
                    }
                    first_week = false;

                    for (day, events) in week.iter().filter(|(_, events)| !events.is_empty()) {
                        let label = format!("{} {}", format_date(*day), day.format("%a"));
                        let label = match (day.month() == month.month, *day == today()) {
                            (false, _) => label.dimmed(),
                            (true, true) => label.bold().underline(),
                            (true, false) => label.bold(),
                        };
                        println!("{label}");

                        let rows: Vec<_> = events.iter().map(|e| EventRow::on(e, *day)).collect();
                        for line in formatter.format(&rows).to_string().lines() {
                            println!("  {line}");
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// The days of the month grid: from the Sunday on or before the 1st to the Saturday on
/// or after the last day of the month.
pub fn calendar_days(month: YearMonth) -> Option<Vec<NaiveDate>> {
    let first = month.first_day()?;
    let last = month.last_day()?;

    let start = first.week(Weekday::Sun).first_day();
    let end = last.week(Weekday::Sun).last_day();
    Some(start.iter_days().take_while(|d| *d <= end).collect())
}
