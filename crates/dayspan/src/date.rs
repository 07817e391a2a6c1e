//! The calendar-day value type.
//!
//! A [`CalendarDate`] is a plain year/month/day with no time-of-day and no
//! timezone attached, canonically written `YYYY-MM-DD`. Keeping dates in
//! this form (rather than as instants) is what makes day navigation immune
//! to DST transitions: succeeding a calendar date can never skip or
//! duplicate a day, whereas "+24 hours" across a spring-forward can.
//!
//! Construction is validated: the string must be exactly `YYYY-MM-DD` with
//! zero-padded, all-digit components, must denote a real Gregorian date
//! (leap years respected), and the year must fall in
//! [`MIN_YEAR`]..=[`MAX_YEAR`]. Out-of-range input is rejected, never
//! clamped. Dates the engine derives by its own arithmetic (grid cells from
//! adjacent months, navigation results) are not re-bounded.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DayspanError;

/// Earliest year accepted from input.
pub const MIN_YEAR: i32 = 1900;

/// Latest year accepted from input.
pub const MAX_YEAR: i32 = 2100;

/// A calendar day, ordered chronologically.
///
/// The derived ordering agrees with lexicographic ordering of the canonical
/// `YYYY-MM-DD` string form, so comparisons done on either representation
/// agree.
///
/// # Examples
///
/// ```
/// use dayspan::CalendarDate;
///
/// let date: CalendarDate = "2025-09-02".parse().unwrap();
/// assert_eq!(date.to_string(), "2025-09-02");
/// assert_eq!(date.day_of_week(), 2); // Tuesday, Sunday = 0
///
/// assert!("2025-02-29".parse::<CalendarDate>().is_err()); // not a leap year
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from year/month/day components.
    ///
    /// # Errors
    ///
    /// Returns [`DayspanError::InvalidDate`] if the year is outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`] or the components do not denote a real
    /// Gregorian date (month outside 1-12, day invalid for that month/year).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DayspanError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DayspanError::InvalidDate(format!(
                "year {year} outside supported range {MIN_YEAR}..={MAX_YEAR}"
            )));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                DayspanError::InvalidDate(format!(
                    "{year:04}-{month:02}-{day:02} is not a real calendar date"
                ))
            })
    }

    pub(crate) fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub(crate) fn to_naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// 1-indexed month.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Day of week with Sunday = 0 through Saturday = 6.
    pub fn day_of_week(self) -> u8 {
        self.0.weekday().num_days_from_sunday() as u8
    }

    /// The next calendar day, as ordinary Gregorian succession.
    ///
    /// # Errors
    ///
    /// Returns [`DayspanError::InvalidDate`] only if the successor falls
    /// outside the range chrono can represent.
    pub fn succ(self) -> Result<Self, DayspanError> {
        self.0
            .succ_opt()
            .map(Self)
            .ok_or_else(|| DayspanError::InvalidDate("date overflow past calendar range".into()))
    }

    /// The previous calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`DayspanError::InvalidDate`] only if the predecessor falls
    /// outside the range chrono can represent.
    pub fn pred(self) -> Result<Self, DayspanError> {
        self.0
            .pred_opt()
            .map(Self)
            .ok_or_else(|| DayspanError::InvalidDate("date underflow past calendar range".into()))
    }

    /// The date `days` away (negative moves backward).
    pub(crate) fn offset_days(self, days: i64) -> Result<Self, DayspanError> {
        self.0
            .checked_add_signed(Duration::days(days))
            .map(Self)
            .ok_or_else(|| {
                DayspanError::InvalidDate(format!("offset of {days} days leaves calendar range"))
            })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DayspanError;

    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// Stricter than chrono's `%Y-%m-%d`: the components must be zero-padded
    /// to exactly 4-2-2 digits, so `"2025-9-3"` is rejected rather than
    /// accepted with a non-canonical form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(DayspanError::InvalidDate(format!(
                "'{s}': expected YYYY-MM-DD"
            )));
        }

        let year: i32 = s[..4]
            .parse()
            .map_err(|_| DayspanError::InvalidDate(format!("'{s}': bad year")))?;
        let month: u32 = s[5..7]
            .parse()
            .map_err(|_| DayspanError::InvalidDate(format!("'{s}': bad month")))?;
        let day: u32 = s[8..]
            .parse()
            .map_err(|_| DayspanError::InvalidDate(format!("'{s}': bad day")))?;

        Self::new(year, month, day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Day sequences ───────────────────────────────────────────────────────────

/// A finite run of consecutive calendar days.
///
/// Lazy and restartable: it is `Clone`, so a caller can iterate the same
/// week or month more than once, and [`ExactSizeIterator`] reports the
/// remaining length.
#[derive(Debug, Clone)]
pub struct DaySeq {
    cursor: NaiveDate,
    remaining: usize,
}

impl DaySeq {
    pub(crate) fn new(start: CalendarDate, len: usize) -> Self {
        Self {
            cursor: start.0,
            remaining: len,
        }
    }
}

impl Iterator for DaySeq {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        if self.remaining == 0 {
            return None;
        }
        let date = CalendarDate(self.cursor);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.cursor = self.cursor.succ_opt()?;
        }
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DaySeq {}

// ── Tests ───────────────────────────────────────────────────────────────────
