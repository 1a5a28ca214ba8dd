// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calgrid_core::time::{STABLE_FORMAT_DATE, parse_date};
use chrono::{Datelike, Local, NaiveDate};
use colored::Color;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a day argument: `YYYY-MM-DD`, `today`, `tomorrow` or `yesterday`.
pub fn parse_day(s: &str) -> Result<NaiveDate, String> {
    match s.trim() {
        "today" => Ok(today()),
        "tomorrow" => today()
            .succ_opt()
            .ok_or_else(|| "Date out of range".to_string()),
        "yesterday" => today()
            .pred_opt()
            .ok_or_else(|| "Date out of range".to_string()),
        s => parse_date(s).ok_or_else(|| format!("Invalid date '{s}', expected YYYY-MM-DD")),
    }
}

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        let (year, month) = match self.month {
            12 => (self.year.checked_add(1)?, 1),
            m => (self.year, m + 1),
        };
        NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
    }
}

/// Parses a month argument in the form `YYYY-MM`.
pub fn parse_month(s: &str) -> Result<YearMonth, String> {
    let err = || format!("Invalid month '{s}', expected YYYY-MM");
    let (year, month) = s.trim().split_once('-').ok_or_else(err)?;
    let year = year.parse().map_err(|_| err())?;
    let month = month.parse().map_err(|_| err())?;
    let ym = YearMonth { year, month };
    ym.first_day().map(|_| ym).ok_or_else(err)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(STABLE_FORMAT_DATE).to_string()
}

/// Parses a `#rrggbb` event color.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::TrueColor {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Truncates `s` to at most `max_width` display columns, appending an ellipsis when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.to_string().width();
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
