//! Clock capability for date/time substitutions.
//!
//! `\chdate`, `\chdpa`, `\chdpl` and `\chtime` expand to the current date or
//! time. The converter never reads the system clock directly; it asks the
//! [`Clock`] it was built with, so output is reproducible under test.

use chrono::{Local, NaiveDateTime};
use rtf2txt_tables::DateStyle;

/// Source of the current local date and time.
pub trait Clock {
    /// The current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The host's local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

pub(crate) fn format_date(at: NaiveDateTime, style: DateStyle) -> String {
    let pattern = match style {
        DateStyle::Numeric => "%Y-%m-%d",
        DateStyle::Abbreviated => "%a, %b %-d, %Y",
        DateStyle::Long => "%A, %B %-d, %Y",
    };
    at.format(pattern).to_string()
}

pub(crate) fn format_time(at: NaiveDateTime) -> String {
    at.format("%-I:%M %P").to_string()
}
