// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use calgrid_core::{APP_NAME, EventStore};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cmd_day::CmdDay;
use crate::cmd_event::{CmdEventCheck, CmdEventDelete, CmdEventEdit, CmdEventNew};
use crate::cmd_month::CmdMonth;
use crate::config::parse_config;
use crate::snapshot;
use crate::util::OutputFormat;

/// Run the calgrid command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Recurring events, day agendas and conflict checks for your calendar.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to today's agenda
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/calgrid/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/calgrid/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDay::command())
            .subcommand(CmdMonth::command())
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Manage your events")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventNew::command())
                    .subcommand(CmdEventEdit::command())
                    .subcommand(CmdEventDelete::command())
                    .subcommand(CmdEventCheck::command()),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdDay::NAME, matches)) => Day(CmdDay::from(matches)),
            Some((CmdMonth::NAME, matches)) => Month(CmdMonth::from(matches)),
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventNew::NAME, matches)) => EventNew(CmdEventNew::from(matches)),
                Some((CmdEventEdit::NAME, matches)) => EventEdit(CmdEventEdit::from(matches)?),
                Some((CmdEventDelete::NAME, matches)) => EventDelete(CmdEventDelete::from(matches)),
                Some((CmdEventCheck::NAME, matches)) => EventCheck(CmdEventCheck::from(matches)),
                _ => unreachable!(),
            },
            None => Day(CmdDay {
                day: None,
                output_format: OutputFormat::Table,
                verbose: false,
            }),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the events of a day
    Day(CmdDay),

    /// Show the events of a month
    Month(CmdMonth),

    /// Add a new event
    EventNew(CmdEventNew),

    /// Edit an event
    EventEdit(CmdEventEdit),

    /// Delete events
    EventDelete(CmdEventDelete),

    /// Check an event for conflicts
    EventCheck(CmdEventCheck),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Day(a)         => Self::run_with(config, false, |x| a.run(x)).await,
            Month(a)       => Self::run_with(config, false, |x| a.run(x)).await,
            EventNew(a)    => Self::run_with(config, true,  |x| a.run(x)).await,
            EventEdit(a)   => Self::run_with(config, true,  |x| a.run(x)).await,
            EventDelete(a) => Self::run_with(config, true,  |x| a.run(x)).await,
            EventCheck(a)  => Self::run_with(config, false, |x| a.run(x)).await,
        }
    }

    /// Loads the events, runs `f` on them and writes them back if `save` is set.
    async fn run_with<F>(config: Option<PathBuf>, save: bool, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&mut EventStore) -> Result<(), Box<dyn Error>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let path = config
            .events_path
            .clone()
            .ok_or("No events path configured and no data directory found")?;

        let events = snapshot::load(&path).await?;
        let mut store = EventStore::with_detector(events, config.detector());

        f(&mut store)?;

        if save {
            snapshot::save(&path, store.events()).await?;
        }
        Ok(())
    }
}
