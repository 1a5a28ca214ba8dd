// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calgrid_core::EventStore;
use chrono::NaiveDate;
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::CommonArgs;
use crate::event_formatter::{EventFormatter, EventRow};
use crate::util::{OutputFormat, format_date, today};

#[derive(Debug, Clone, Copy)]
pub struct CmdDay {
    pub day: Option<NaiveDate>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("Show the events of a day")
            .arg(CommonArgs::day())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            day: CommonArgs::get_day(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self, store: &EventStore) -> Result<(), Box<dyn Error>> {
        let day = self.day.unwrap_or_else(today);
        tracing::debug!(%day, "listing events of day...");

        let rows: Vec<_> = store
            .events_on_day(day)
            .into_iter()
            .map(|event| EventRow::on(event, day))
            .collect();

        if self.output_format == OutputFormat::Table {
            println!("🗓️ {}", format!("{} {}", format_date(day), day.format("%A")).bold());
            if rows.is_empty() {
                println!("{}", "No events".dimmed());
                return Ok(());
            }
        }

        let formatter = EventFormatter::new(self.verbose).with_output_format(self.output_format);
        println!("{}", formatter.format(&rows));
        Ok(())
    }
}
