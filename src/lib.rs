mod consts;
mod prelude;
mod resource;
mod span;
mod types;

pub use consts::*;
pub use resource::{ResourceError, read_resource};
pub use span::YearSpan;
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;
use types::days_in_month;

/// A concrete date under the proleptic Gregorian calendar.
///
/// Immutable value semantics: two dates with equal components are
/// interchangeable. Displays in month-first `M/D/YYYY` form without
/// zero padding (month 3 renders as `3`, not `03`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}/{}/{}", "month.get()", "day.get()", "year.get()")]
pub struct CalendarDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {month}/{year}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from already-validated components
    pub const fn new(year: types::Year, month: types::Month, day: types::Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from raw year, month, and day numbers.
    ///
    /// Returns `None` when any component is zero or negative. Out-of-range
    /// month and day values are normalized by rolling over into the
    /// following months and years (month 13 of 2020 is January 2021,
    /// January 45 is February 14), mirroring how calendar construction
    /// resolved oversized components in the utility this crate replaces.
    /// Returns `None` if rollover carries the year past `MAX_YEAR`.
    pub fn from_ymd(year: i64, month: i64, day: i64) -> Option<Self> {
        if year <= 0 || month <= 0 || day <= 0 {
            return None;
        }
        let (y, m, d) = normalize(year, month, day)?;
        Some(Self {
            year: types::Year::new(y).ok()?,
            month: types::Month::new(m).ok()?,
            day: types::Day::new(d, y, m).ok()?,
        })
    }

    /// Returns the year component (as u16 for convenience)
    pub fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (as u8 for convenience)
    pub fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (as u8 for convenience)
    pub fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> types::Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> types::Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> types::Day {
        self.day
    }

    /// Returns the components as a (year, month, day) tuple
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }
}

// --- rollover normalization for from_ymd ---
fn normalize(year: i64, month: i64, day: i64) -> Option<(u16, u8, u8)> {
    debug_assert!(year > 0 && month > 0 && day > 0);
    let months = i64::from(MAX_MONTH);

    // Whole extra years hiding in the month component roll over first
    let mut year = u16::try_from(year.checked_add((month - 1) / months)?).ok()?;
    let mut month = u8::try_from((month - 1) % months + 1).ok()?;
    let mut day = day;

    // Then walk the day component forward one month at a time
    loop {
        if year > MAX_YEAR {
            return None;
        }
        let max = i64::from(days_in_month(year, month));
        if day <= max {
            break;
        }
        day -= max;
        if month == DECEMBER {
            month = JANUARY;
            year = year.checked_add(1)?;
        } else {
            month += 1;
        }
    }
    Some((year, month, u8::try_from(day).ok()?))
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses the strict month-first form `M/D/YYYY` (the inverse of
    /// `Display`). Unlike `from_ymd`, out-of-range components are parse
    /// errors here, not rollover.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected month{sep}day{sep}year, found {} component(s)",
                parts.len(),
                sep = DATE_SEPARATOR,
            )));
        }

        // Parse components - InvalidFormat if not numeric
        let month_u8 = Self::parse_u8(parts[0])?;
        let day_u8 = Self::parse_u8(parts[1])?;
        let year_u16 = Self::parse_u16(parts[2])?;

        // Validate and convert to NonZero types
        let year = types::Year::new(year_u16)?;
        let month = types::Month::new(month_u8)?;
        let day = types::Day::new(day_u8, year_u16, month_u8)?;

        Ok(Self { year, month, day })
    }
}

impl CalendarDate {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        let (y, m, d) = value;
        let year = types::Year::new(y)?;
        let month = types::Month::new(m)?;
        let day = types::Day::new(d, y, m)?;
        Ok(Self { year, month, day })
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
