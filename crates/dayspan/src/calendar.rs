//! Timezone-aware calendar arithmetic.
//!
//! Pure functions for computing "today", navigating dates, and deriving
//! week/month boundaries and calendar grids, all with respect to an IANA
//! timezone identifier. Clock-reading entry points have `*_at` twins that
//! take the "now" instant explicitly (the clock-reading form just passes
//! `chrono::Utc::now()`), keeping the arithmetic testable against fixed
//! anchors.
//!
//! Two distinct kinds of computation live here and must not be conflated:
//!
//! - **Instant-derived**: [`today`] converts the current instant into the
//!   target timezone before taking the calendar date, so a process running
//!   in UTC still reports the user's local day.
//! - **Pure succession**: [`navigate_date`], [`week_start`], and friends
//!   operate on calendar dates alone. A DST spring-forward or fall-back in
//!   the timezone never skips or duplicates a calendar date.
//!
//! # Functions
//!
//! - [`today`] / [`today_at`] — Current calendar date in a timezone
//! - [`navigate_date`] — Previous/next calendar date
//! - [`is_today`] / [`is_future_date`] — Compare a date against today
//! - [`week_start`] / [`week_end`] / [`week_range`] / [`week_dates`] — ISO week bounds
//! - [`month_start`] / [`month_end`] / [`month_dates`] — Month bounds
//! - [`calendar_grid`] — 42-cell Sunday-aligned month grid

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::date::{CalendarDate, DaySeq};
use crate::error::DayspanError;
use crate::resolve::parse_timezone;

/// Cell count of a month grid: 6 weeks of 7 days.
pub const GRID_CELLS: usize = 42;

// ── Direction ───────────────────────────────────────────────────────────────

/// Which neighbor of a date to navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
        }
    }
}

impl FromStr for Direction {
    type Err = DayspanError;

    /// Parse `"prev"` or `"next"`.
    ///
    /// # Errors
    ///
    /// Returns [`DayspanError::InvalidDirection`] for anything else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            other => Err(DayspanError::InvalidDirection(format!(
                "'{other}': expected 'prev' or 'next'"
            ))),
        }
    }
}

// ── Derived structures ──────────────────────────────────────────────────────

/// An ISO week: Monday start, Sunday end, end = start + 6 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub date: CalendarDate,
    /// Whether the cell belongs to the grid's target month, as opposed to
    /// the leading/trailing days of adjacent months.
    pub is_current_month: bool,
    pub is_today: bool,
    /// Sunday = 0 through Saturday = 6.
    pub day_of_week: u8,
}

// ── today ───────────────────────────────────────────────────────────────────

/// The current calendar date as observed in `timezone`.
///
/// # Errors
///
/// Returns [`DayspanError::InvalidTimezone`] if the identifier is not in
/// the tz database.
pub fn today(timezone: &str) -> Result<CalendarDate, DayspanError> {
    today_at(Utc::now(), timezone)
}

/// The calendar date at instant `now` as observed in `timezone`.
///
/// The instant is converted into the target timezone before the date is
/// taken, never read off a naive local clock, so a process running in UTC
/// still reports the user's local day.
///
/// # Errors
///
/// Returns [`DayspanError::InvalidTimezone`] if the identifier is not in
/// the tz database.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use dayspan::today_at;
///
/// // 05:00 UTC on September 2 is still the evening of September 1 on the
/// // US west coast.
/// let now = Utc.with_ymd_and_hms(2025, 9, 2, 5, 0, 0).unwrap();
/// assert_eq!(today_at(now, "America/Los_Angeles").unwrap().to_string(), "2025-09-01");
/// assert_eq!(today_at(now, "UTC").unwrap().to_string(), "2025-09-02");
/// ```
pub fn today_at(now: DateTime<Utc>, timezone: &str) -> Result<CalendarDate, DayspanError> {
    let tz = parse_timezone(timezone)?;
    Ok(CalendarDate::from_naive(now.with_timezone(&tz).date_naive()))
}

// ── navigation ──────────────────────────────────────────────────────────────

/// The calendar date immediately before or after `date`.
///
/// This is ordinary Gregorian succession on the calendar date itself, not
/// instant arithmetic shifted through the timezone, so DST transitions in
/// `timezone` cannot perturb the result.
///
/// # Errors
///
/// Returns [`DayspanError::InvalidDate`] for a malformed or unreal date
/// and [`DayspanError::InvalidTimezone`] for an unresolvable identifier.
///
/// # Examples
///
/// ```
/// use dayspan::{navigate_date, Direction};
///
/// let next = navigate_date("2025-08-31", Direction::Next, "UTC").unwrap();
/// assert_eq!(next.to_string(), "2025-09-01");
///
/// let prev = navigate_date("2026-01-01", Direction::Prev, "UTC").unwrap();
/// assert_eq!(prev.to_string(), "2025-12-31");
/// ```
pub fn navigate_date(
    date: &str,
    direction: Direction,
    timezone: &str,
) -> Result<CalendarDate, DayspanError> {
    parse_timezone(timezone)?;
    let date: CalendarDate = date.parse()?;
    match direction {
        Direction::Prev => date.pred(),
        Direction::Next => date.succ(),
    }
}

/// Whether `date` is today in `timezone`.
///
/// # Errors
///
/// Same failure modes as [`today`] plus [`DayspanError::InvalidDate`] for a
/// malformed date.
pub fn is_today(date: &str, timezone: &str) -> Result<bool, DayspanError> {
    is_today_at(Utc::now(), date, timezone)
}

/// Anchored form of [`is_today`].
pub fn is_today_at(
    now: DateTime<Utc>,
    date: &str,
    timezone: &str,
) -> Result<bool, DayspanError> {
    let today = today_at(now, timezone)?;
    let date: CalendarDate = date.parse()?;
    Ok(date == today)
}

/// Whether `date` is strictly after today in `timezone`.
pub fn is_future_date(date: &str, timezone: &str) -> Result<bool, DayspanError> {
    is_future_date_at(Utc::now(), date, timezone)
}

/// Anchored form of [`is_future_date`].
pub fn is_future_date_at(
    now: DateTime<Utc>,
    date: &str,
    timezone: &str,
) -> Result<bool, DayspanError> {
    let today = today_at(now, timezone)?;
    let date: CalendarDate = date.parse()?;
    Ok(date > today)
}

// ── weeks ───────────────────────────────────────────────────────────────────

/// The Monday on or before `date` (ISO week convention).
///
/// Day-of-week is numbered Sunday = 0, so a Sunday steps back 6 days to the
/// Monday of the week it closes; every other day steps back `dow - 1`.
///
/// # Errors
///
/// Returns [`DayspanError::InvalidDate`] or [`DayspanError::InvalidTimezone`].
///
/// # Examples
///
/// ```
/// use dayspan::week_start;
///
/// // Tuesday and the following Sunday land on the same Monday.
/// assert_eq!(week_start("2025-09-02", "UTC").unwrap().to_string(), "2025-09-01");
/// assert_eq!(week_start("2025-09-07", "UTC").unwrap().to_string(), "2025-09-01");
/// ```
pub fn week_start(date: &str, timezone: &str) -> Result<CalendarDate, DayspanError> {
    parse_timezone(timezone)?;
    let date: CalendarDate = date.parse()?;
    week_start_of(date)
}

/// The Sunday of `date`'s ISO week: week start + 6 days.
pub fn week_end(date: &str, timezone: &str) -> Result<CalendarDate, DayspanError> {
    parse_timezone(timezone)?;
    let date: CalendarDate = date.parse()?;
    week_start_of(date)?.offset_days(6)
}

/// Both ends of `date`'s ISO week at once.
pub fn week_range(date: &str, timezone: &str) -> Result<WeekRange, DayspanError> {
    parse_timezone(timezone)?;
    let date: CalendarDate = date.parse()?;
    let start = week_start_of(date)?;
    let end = start.offset_days(6)?;
    Ok(WeekRange { start, end })
}

/// The 7 consecutive dates beginning at `week_start`.
///
/// The caller is responsible for passing an actual week-start date; the
/// input is not re-normalized to a Monday.
///
/// # Errors
///
/// Returns [`DayspanError::InvalidDate`] or [`DayspanError::InvalidTimezone`].
pub fn week_dates(week_start: &str, timezone: &str) -> Result<DaySeq, DayspanError> {
    parse_timezone(timezone)?;
    let start: CalendarDate = week_start.parse()?;
    start.offset_days(6)?;
    Ok(DaySeq::new(start, 7))
}

/// Monday on/before `date`, on the Sunday-zero numbering.
fn week_start_of(date: CalendarDate) -> Result<CalendarDate, DayspanError> {
    let dow = i64::from(date.day_of_week());
    let back = if dow == 0 { 6 } else { dow - 1 };
    date.offset_days(-back)
}

// ── months ──────────────────────────────────────────────────────────────────

/// First day of the 1-indexed `month` of `year`.
///
/// # Errors
///
/// Returns [`DayspanError::InvalidDate`] if `month` is outside 1..=12 or
/// `year` is outside the supported range, and
/// [`DayspanError::InvalidTimezone`] for an unresolvable identifier.
pub fn month_start(year: i32, month: u32, timezone: &str) -> Result<CalendarDate, DayspanError> {
    parse_timezone(timezone)?;
    CalendarDate::new(year, month, 1)
}

/// Last day of the 1-indexed `month` of `year`.
///
/// Month length is derived, not tabulated: the last day is the day before
/// the first of the following month, which handles 28/29/30/31 and leap
/// years uniformly.
pub fn month_end(year: i32, month: u32, timezone: &str) -> Result<CalendarDate, DayspanError> {
    parse_timezone(timezone)?;
    month_end_of(year, month)
}

/// Every day of the 1-indexed `month` of `year`, in order.
pub fn month_dates(year: i32, month: u32, timezone: &str) -> Result<DaySeq, DayspanError> {
    parse_timezone(timezone)?;
    let start = CalendarDate::new(year, month, 1)?;
    let end = month_end_of(year, month)?;
    Ok(DaySeq::new(start, end.day() as usize))
}

fn month_end_of(year: i32, month: u32) -> Result<CalendarDate, DayspanError> {
    // Validates year and month before the unbounded derivation below.
    CalendarDate::new(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(CalendarDate::from_naive)
        .ok_or_else(|| {
            DayspanError::InvalidDate(format!("no last day for {year:04}-{month:02}"))
        })
}

// ── calendar grid ───────────────────────────────────────────────────────────

/// The 6×7 Sunday-aligned grid for the 1-indexed `month` of `year`.
///
/// Exactly [`GRID_CELLS`] cells: leading trailing-days of the previous
/// month back to the nearest Sunday (none when the month starts on a
/// Sunday), every day of the target month with `is_current_month` set, and
/// trailing leading-days of the next month to fill the last week rows.
///
/// # Errors
///
/// Same failure modes as [`month_start`].
pub fn calendar_grid(
    year: i32,
    month: u32,
    timezone: &str,
) -> Result<Vec<GridCell>, DayspanError> {
    calendar_grid_at(Utc::now(), year, month, timezone)
}

/// Anchored form of [`calendar_grid`]; `is_today` is evaluated against
/// `now` as observed in `timezone`.
pub fn calendar_grid_at(
    now: DateTime<Utc>,
    year: i32,
    month: u32,
    timezone: &str,
) -> Result<Vec<GridCell>, DayspanError> {
    let today = today_at(now, timezone)?;
    let first = CalendarDate::new(year, month, 1)?;
    let lead = i64::from(first.day_of_week());
    let origin = first.offset_days(-lead)?;

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for i in 0..GRID_CELLS as i64 {
        let date = origin.offset_days(i)?;
        cells.push(GridCell {
            date,
            is_current_month: date.year() == year && date.month() == month,
            is_today: date == today,
            day_of_week: date.day_of_week(),
        });
    }
    Ok(cells)
}

// ── Tests ───────────────────────────────────────────────────────────────────
