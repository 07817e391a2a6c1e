//! Human-readable rendering of calendar dates.
//!
//! Rendering goes through chrono's formatting facility rather than
//! hand-rolled month-name tables. A calendar date is already a day in the
//! caller's timezone, so the timezone argument does not change the text;
//! it is validated like everywhere else so an unresolvable identifier
//! surfaces here too instead of slipping through the display layer.

use crate::date::CalendarDate;
use crate::error::DayspanError;
use crate::resolve::parse_timezone;

/// Long form: full weekday, full month name, day, year.
///
/// # Errors
///
/// Returns [`DayspanError::InvalidDate`] for a malformed date and
/// [`DayspanError::InvalidTimezone`] for an unresolvable identifier.
///
/// # Examples
///
/// ```
/// use dayspan::format_long;
///
/// assert_eq!(
///     format_long("2025-09-02", "UTC").unwrap(),
///     "Tuesday, September 2, 2025"
/// );
/// ```
pub fn format_long(date: &str, timezone: &str) -> Result<String, DayspanError> {
    parse_timezone(timezone)?;
    let date: CalendarDate = date.parse()?;
    Ok(date.to_naive().format("%A, %B %-d, %Y").to_string())
}

/// Compact numeric form, month and day unpadded.
///
/// # Examples
///
/// ```
/// use dayspan::format_short;
///
/// assert_eq!(format_short("2025-09-02", "UTC").unwrap(), "9/2/2025");
/// ```
pub fn format_short(date: &str, timezone: &str) -> Result<String, DayspanError> {
    parse_timezone(timezone)?;
    let date: CalendarDate = date.parse()?;
    Ok(date.to_naive().format("%-m/%-d/%Y").to_string())
}

/// Range form for the week beginning at `week_start`:
/// `"<Month> <Day> - <Month> <Day>, <Year>"`.
///
/// Both month names always appear, so a month-crossing week reads
/// naturally, and the year is the end date's and is attached to the end
/// only, so a year-crossing week shows the new year.
///
/// # Examples
///
/// ```
/// use dayspan::format_week_range;
///
/// assert_eq!(
///     format_week_range("2025-09-01", "UTC").unwrap(),
///     "September 1 - September 7, 2025"
/// );
/// ```
pub fn format_week_range(week_start: &str, timezone: &str) -> Result<String, DayspanError> {
    parse_timezone(timezone)?;
    let start: CalendarDate = week_start.parse()?;
    let end = start.offset_days(6)?;
    Ok(format!(
        "{} - {}, {}",
        start.to_naive().format("%B %-d"),
        end.to_naive().format("%B %-d"),
        end.year()
    ))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── long/short form tests ───────────────────────────────────────────

    #[test]
    fn test_format_long() {
        assert_eq!(
            format_long("2025-09-02", "UTC").unwrap(),
            "Tuesday, September 2, 2025"
        );
        assert_eq!(
            format_long("2024-02-29", "America/New_York").unwrap(),
            "Thursday, February 29, 2024"
        );
    }

    #[test]
    fn test_format_short() {
        assert_eq!(format_short("2025-09-02", "UTC").unwrap(), "9/2/2025");
        assert_eq!(format_short("2025-12-31", "UTC").unwrap(), "12/31/2025");
        assert_eq!(format_short("2025-01-05", "UTC").unwrap(), "1/5/2025");
    }

    #[test]
    fn test_format_is_idempotent() {
        let first = format_long("2025-09-02", "America/Denver").unwrap();
        let second = format_long("2025-09-02", "America/Denver").unwrap();
        assert_eq!(first, second);
        let first = format_short("2025-09-02", "America/Denver").unwrap();
        let second = format_short("2025-09-02", "America/Denver").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_rejects_bad_inputs() {
        let err = format_long("2025-02-30", "UTC").unwrap_err().to_string();
        assert!(err.contains("Invalid date"), "got: {err}");
        let err = format_short("2025-09-02", "Not/AZone")
            .unwrap_err()
            .to_string();
        assert!(err.contains("Invalid timezone"), "got: {err}");
    }

    // ── week range tests ────────────────────────────────────────────────

    #[test]
    fn test_week_range_within_one_month() {
        let text = format_week_range("2025-09-01", "UTC").unwrap();
        assert_eq!(text, "September 1 - September 7, 2025");
        assert!(text.contains("September 1"));
        assert!(text.contains("September 7"));
        assert!(text.contains("2025"));
    }

    #[test]
    fn test_week_range_crossing_month_names_both_months() {
        // Monday 2025-09-29 runs through Sunday 2025-10-05.
        assert_eq!(
            format_week_range("2025-09-29", "UTC").unwrap(),
            "September 29 - October 5, 2025"
        );
    }

    #[test]
    fn test_week_range_crossing_year_uses_end_year() {
        // Monday 2025-12-29 runs through Sunday 2026-01-04.
        assert_eq!(
            format_week_range("2025-12-29", "UTC").unwrap(),
            "December 29 - January 4, 2026"
        );
    }

    #[test]
    fn test_week_range_rejects_bad_inputs() {
        assert!(format_week_range("2025-13-01", "UTC").is_err());
        assert!(format_week_range("2025-09-01", "Not/AZone").is_err());
    }
}
