// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use calgrid_core::time::STABLE_FORMAT_TIME;
use calgrid_core::{ConflictType, ConflictedEvent, Event, Interval, materialize, materialize_anchor};
use chrono::NaiveDate;
use colored::Color;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{OutputFormat, format_date, parse_hex_color, truncate_to_width};

const SHORT_ID_LEN: usize = 8;
const MAX_TITLE_WIDTH: usize = 40;

/// One occurrence of an event, as listed.
#[derive(Debug, Clone)]
pub struct EventRow<'a> {
    pub event: &'a Event,
    pub interval: Interval,
    pub conflict: Option<ConflictType>,
}

impl<'a> EventRow<'a> {
    /// The occurrence of `event` on `day`.
    pub fn on(event: &'a Event, day: NaiveDate) -> Self {
        Self {
            event,
            interval: materialize(event, day),
            conflict: None,
        }
    }

    /// The first occurrence of `event`.
    pub fn anchor(event: &'a Event) -> Self {
        Self {
            event,
            interval: materialize_anchor(event),
            conflict: None,
        }
    }

    pub fn conflicted(conflicted: &'a ConflictedEvent) -> Self {
        Self {
            conflict: Some(conflicted.conflict_type),
            ..Self::anchor(&conflicted.event)
        }
    }
}

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(verbose: bool) -> Self {
        let mut columns = vec![
            EventColumn::Id(EventColumnId { full: verbose }),
            EventColumn::Time(EventColumnTime),
            EventColumn::Title(EventColumnTitle { full: verbose }),
            EventColumn::Repeat(EventColumnRepeat),
        ];
        if verbose {
            columns.push(EventColumn::Description(EventColumnDescription));
        }

        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    /// Adds the occurrence date after the id.
    pub fn with_date(mut self) -> Self {
        self.columns.insert(1, EventColumn::Date(EventColumnDate));
        self
    }

    /// Adds the conflict type as the last column.
    pub fn with_conflict(mut self) -> Self {
        self.columns.push(EventColumn::Conflict(EventColumnConflict));
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        if format == OutputFormat::Json {
            for col in &mut self.columns {
                match col {
                    EventColumn::Id(a) => a.full = true,
                    EventColumn::Title(a) => a.full = true,
                    _ => {}
                }
            }
        }
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [EventRow<'a>]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [EventRow<'a>],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(f, "{}", Table::new(TableStyleJson::new(), columns, self.rows)),
            OutputFormat::Table => {
                write!(f, "{}", Table::new(TableStyleBasic::new(), columns, self.rows))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventColumn {
    Conflict(EventColumnConflict),
    Date(EventColumnDate),
    Description(EventColumnDescription),
    Id(EventColumnId),
    Repeat(EventColumnRepeat),
    Time(EventColumnTime),
    Title(EventColumnTitle),
}

impl<'r> TableColumn<EventRow<'r>> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Conflict(_) => "conflict",
            EventColumn::Date(_) => "date",
            EventColumn::Description(_) => "description",
            EventColumn::Id(_) => "id",
            EventColumn::Repeat(_) => "repeat",
            EventColumn::Time(_) => "time",
            EventColumn::Title(_) => "title",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a EventRow<'r>) -> Cow<'a, str> {
        match self {
            EventColumn::Conflict(a) => a.format(data),
            EventColumn::Date(a) => a.format(data),
            EventColumn::Description(a) => a.format(data),
            EventColumn::Id(a) => a.format(data),
            EventColumn::Repeat(a) => a.format(data),
            EventColumn::Time(a) => a.format(data),
            EventColumn::Title(a) => a.format(data),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id(_) => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &EventRow<'r>) -> Option<Color> {
        match self {
            EventColumn::Title(_) => parse_hex_color(&data.event.color),
            EventColumn::Conflict(_) => Some(Color::Yellow),
            EventColumn::Id(_) | EventColumn::Repeat(_) => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnConflict;

impl EventColumnConflict {
    fn format<'a>(&self, row: &'a EventRow<'_>) -> Cow<'a, str> {
        row.conflict
            .as_ref()
            .map(|c| Cow::Borrowed(c.as_ref()))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnDate;

impl EventColumnDate {
    fn format<'a>(&self, row: &'a EventRow<'_>) -> Cow<'a, str> {
        format_date(row.interval.start.date()).into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnDescription;

impl EventColumnDescription {
    fn format<'a>(&self, row: &'a EventRow<'_>) -> Cow<'a, str> {
        row.event.description.as_str().into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnId {
    full: bool,
}

impl EventColumnId {
    fn format<'a>(&self, row: &'a EventRow<'_>) -> Cow<'a, str> {
        let id = row.event.id.as_str();
        match self.full {
            true => id.into(),
            false => id.chars().take(SHORT_ID_LEN).collect::<String>().into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnRepeat;

impl EventColumnRepeat {
    fn format<'a>(&self, row: &'a EventRow<'_>) -> Cow<'a, str> {
        match &row.event.recurrence {
            Some(r) => r.to_string().into(),
            None => "".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnTime;

impl EventColumnTime {
    fn format<'a>(&self, row: &'a EventRow<'_>) -> Cow<'a, str> {
        let Interval { start, end } = row.interval;
        let next_day = match end.date() > start.date() {
            true => "+1",
            false => "",
        };
        format!(
            "{}~{}{next_day}",
            start.format(STABLE_FORMAT_TIME),
            end.format(STABLE_FORMAT_TIME),
        )
        .into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnTitle {
    full: bool,
}

impl EventColumnTitle {
    fn format<'a>(&self, row: &'a EventRow<'_>) -> Cow<'a, str> {
        match self.full {
            true => row.event.title.as_str().into(),
            false => truncate_to_width(&row.event.title, MAX_TITLE_WIDTH).into(),
        }
    }
}
