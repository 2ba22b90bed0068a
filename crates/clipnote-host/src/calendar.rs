//! Calendar adapters.

use chrono::{Local, NaiveDate};

use clipnote_core::format_date_folder;

use crate::ports::Calendar;

/// Calendar backed by the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCalendar;

impl SystemCalendar {
    pub fn new() -> Self {
        Self
    }
}

impl Calendar for SystemCalendar {
    fn date_folder(&self, pattern: &str) -> String {
        format_date_folder(pattern, Local::now().date_naive())
    }
}

/// Calendar pinned to one date. Keeps folder routing deterministic in tests
/// and replayable batch runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedCalendar {
    date: NaiveDate,
}

impl FixedCalendar {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Calendar for FixedCalendar {
    fn date_folder(&self, pattern: &str) -> String {
        format_date_folder(pattern, self.date)
    }
}
