//! Timezone preference resolution and ambient detection.
//!
//! The effective timezone for a user is decided in priority order: an
//! explicit stored preference, then the ambient environment (the `TZ`
//! variable, then the operating system's configured zone), then a fixed
//! fallback. Resolution never fails; worst case it returns
//! [`FALLBACK_TIMEZONE`], since a missing ambient zone is an expected
//! runtime condition in headless/server contexts, not a caller bug.
//!
//! A successful detection is memoized process-wide so repeated calls do not
//! re-query the environment. A failed detection is NOT memoized: the next
//! call retries, so an environment that gains a configured zone later is
//! picked up.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono_tz::Tz;
use tracing::debug;

use crate::error::DayspanError;

/// Identifier returned when no preference is stored and detection fails.
pub const FALLBACK_TIMEZONE: &str = "UTC";

/// Stored-preference value meaning "no preference recorded".
///
/// Rows created before a user picks a timezone carry the neutral zone, so a
/// stored `"UTC"` triggers detection rather than being taken literally.
const NO_PREFERENCE: &str = "UTC";

/// Detection result, set once on the first successful environment query.
static DETECTED_TZ: OnceLock<String> = OnceLock::new();

/// Resolve the effective timezone for a caller.
///
/// A stored preference other than the no-preference sentinel is returned
/// unchanged: it is trusted as-is, with no validity check at this layer
/// (operations that consume the identifier validate it themselves).
/// Otherwise the ambient environment is consulted via [`detect_timezone`].
///
/// This function never fails.
///
/// # Examples
///
/// ```
/// use dayspan::resolve_timezone;
///
/// assert_eq!(
///     resolve_timezone(Some("America/Denver")),
///     "America/Denver"
/// );
/// ```
pub fn resolve_timezone(stored: Option<&str>) -> String {
    resolve_with(stored, detect_timezone)
}

/// Preference/detection precedence, with the detector injectable for tests.
fn resolve_with(stored: Option<&str>, detect: impl FnOnce() -> String) -> String {
    match stored {
        Some(tz) if tz != NO_PREFERENCE => tz.to_string(),
        _ => detect(),
    }
}

/// Detect the ambient timezone, memoizing the first success.
///
/// Checks the `TZ` environment variable first, then the system zone via
/// `iana-time-zone`; either is accepted only if the tz database resolves
/// it. Returns [`FALLBACK_TIMEZONE`] when nothing usable is found.
pub fn detect_timezone() -> String {
    if let Some(tz) = DETECTED_TZ.get() {
        return tz.clone();
    }
    match detect_ambient() {
        // Concurrent first callers may race here; detection is idempotent,
        // so whichever write wins is the same answer.
        Some(tz) => DETECTED_TZ.get_or_init(|| tz).clone(),
        None => FALLBACK_TIMEZONE.to_string(),
    }
}

/// Query the environment for a resolvable IANA identifier.
fn detect_ambient() -> Option<String> {
    if let Ok(tz_str) = std::env::var("TZ") {
        if Tz::from_str(&tz_str).is_ok() {
            debug!("using timezone from TZ environment variable: {tz_str}");
            return Some(tz_str);
        }
        debug!("TZ variable '{tz_str}' is not a resolvable IANA zone, ignoring");
    }

    match iana_time_zone::get_timezone() {
        Ok(tz_str) => {
            if Tz::from_str(&tz_str).is_ok() {
                debug!("using system timezone: {tz_str}");
                Some(tz_str)
            } else {
                debug!("system timezone '{tz_str}' is not in the tz database");
                None
            }
        }
        Err(e) => {
            debug!("could not detect system timezone: {e:?}");
            None
        }
    }
}

/// Parse an IANA timezone identifier into a [`Tz`].
pub(crate) fn parse_timezone(s: &str) -> Result<Tz, DayspanError> {
    s.parse::<Tz>()
        .map_err(|_| DayspanError::InvalidTimezone(format!("'{s}'")))
}

// ── Tests ───────────────────────────────────────────────────────────────────
