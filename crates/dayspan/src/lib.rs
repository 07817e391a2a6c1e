//! # dayspan
//!
//! Timezone-aware calendar-day arithmetic for coaching and journaling
//! applications.
//!
//! Dayspan computes "today", navigates dates, and derives week/month
//! boundaries and 42-cell month grids, all correctly with respect to an
//! IANA timezone identifier, across daylight-saving transitions and leap
//! years. Dates are plain calendar days (`YYYY-MM-DD`, no time-of-day, no
//! zone), so day succession can never be distorted by a DST offset change;
//! only "today" derivation touches the clock, and it converts the instant
//! into the target timezone first.
//!
//! Malformed dates, unresolvable timezone identifiers, and unknown
//! navigation directions are rejected with an error immediately: they
//! indicate an upstream validation bug, and nothing in this crate retries,
//! defaults, or logs them away. The one exception is timezone *resolution*:
//! [`resolve_timezone`] never fails, falling back to a fixed zone when the
//! environment offers nothing, since a missing ambient timezone is an
//! expected runtime condition rather than a caller bug.
//!
//! ## Modules
//!
//! - [`date`] — The `CalendarDate` value type and day sequences
//! - [`resolve`] — Timezone preference resolution and ambient detection
//! - [`calendar`] — Today, navigation, week/month bounds, calendar grids
//! - [`format`] — Long, short, and week-range display strings
//! - [`error`] — Error types

pub mod calendar;
pub mod date;
pub mod error;
pub mod format;
pub mod resolve;

pub use calendar::{
    calendar_grid, calendar_grid_at, is_future_date, is_future_date_at, is_today, is_today_at,
    month_dates, month_end, month_start, navigate_date, today, today_at, week_dates, week_end,
    week_range, week_start, Direction, GridCell, WeekRange, GRID_CELLS,
};
pub use date::{CalendarDate, DaySeq, MAX_YEAR, MIN_YEAR};
pub use error::DayspanError;
pub use format::{format_long, format_short, format_week_range};
pub use resolve::{detect_timezone, resolve_timezone, FALLBACK_TIMEZONE};
