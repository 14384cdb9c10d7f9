//! Wall-clock / UTC conversion across IANA timezones.
//!
//! Entries store canonical UTC instants; users see and edit the trip's
//! local wall-clock time. Conversion uses an offset probe against the zone
//! database rather than a static table, so it is correct across
//! daylight-saving transitions.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::TimezoneError;

fn parse_zone(zone: &str) -> Result<Tz, TimezoneError> {
    zone.parse::<Tz>().map_err(|_| TimezoneError::InvalidTimezone {
        zone: zone.to_string(),
    })
}

/// Whether `zone` is a known IANA identifier.
///
/// Callers should validate user-supplied zones with this before invoking
/// the conversion functions.
pub fn is_valid_zone(zone: &str) -> bool {
    zone.parse::<Tz>().is_ok()
}

/// Interpret `date` + `time` as wall-clock time in `zone` and return the
/// equivalent UTC instant.
///
/// The offset is measured by probing the zone database twice: once at the
/// wall-clock digits read as UTC, then again at the adjusted candidate. The
/// second probe settles instants that fall close to a transition boundary.
///
/// A wall-clock time that does not exist in `zone` (spring-forward gap)
/// yields a deterministic instant shortly after the transition, but callers
/// must not rely on round-tripping through the gap.
///
/// # Errors
/// Returns [`TimezoneError::InvalidTimezone`] if `zone` is not a known IANA
/// identifier.
pub fn local_to_utc(
    date: NaiveDate,
    time: NaiveTime,
    zone: &str,
) -> Result<DateTime<Utc>, TimezoneError> {
    let tz = parse_zone(zone)?;
    let naive = NaiveDateTime::new(date, time);

    let first = tz.offset_from_utc_datetime(&naive).fix();
    let candidate = naive - first;
    let settled = tz.offset_from_utc_datetime(&candidate).fix();

    Ok(Utc.from_utc_datetime(&(naive - settled)))
}

/// Format a UTC instant as the calendar date and 24-hour wall-clock time in
/// `zone`, truncated to minute precision.
///
/// # Errors
/// Returns [`TimezoneError::InvalidTimezone`] if `zone` is not a known IANA
/// identifier.
pub fn utc_to_local(
    instant: DateTime<Utc>,
    zone: &str,
) -> Result<(NaiveDate, NaiveTime), TimezoneError> {
    let tz = parse_zone(zone)?;
    let local = instant.with_timezone(&tz);
    let time = local.time();
    let truncated =
        NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);
    Ok((local.date_naive(), truncated))
}
