// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod arg;
mod cli;
mod cmd_day;
mod cmd_event;
mod cmd_month;
mod config;
mod event_formatter;
mod snapshot;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_day::CmdDay;
pub use crate::cmd_event::{CmdEventCheck, CmdEventDelete, CmdEventEdit, CmdEventNew};
pub use crate::cmd_month::CmdMonth;
pub use crate::config::parse_config;
pub use crate::util::{OutputFormat, YearMonth};
