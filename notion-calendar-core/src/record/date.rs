//! Parsing of Notion date strings into event times.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::calendar::EventTime;
use crate::error::{CalendarError, CalendarResult};

/// Length of a date-only value (`YYYY-MM-DD`).
const DATE_ONLY_LEN: usize = 10;

/// Parse a Notion date string.
///
/// A `YYYY-MM-DD` value becomes an all-day date and ignores `offset`.
/// Anything else is read as an ISO-8601 timestamp, normalized to UTC and
/// shifted by `offset`. Timestamps without a UTC offset are taken as UTC.
pub fn parse_date_string(value: &str, offset: TimeDelta) -> CalendarResult<EventTime> {
    parse_date_string_in(value, None, offset)
}

/// Like [`parse_date_string`], but timestamps without a UTC offset are
/// interpreted in `time_zone` (an IANA name such as `Europe/Berlin`).
pub fn parse_date_string_in(
    value: &str,
    time_zone: Option<&str>,
    offset: TimeDelta,
) -> CalendarResult<EventTime> {
    if value.len() == DATE_ONLY_LEN {
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| CalendarError::InvalidDate(value.to_string()))?;
        return Ok(EventTime::Date(date));
    }

    let utc = match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => {
            let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
                .map_err(|_| CalendarError::InvalidDate(value.to_string()))?;
            localize(naive, time_zone, value)?
        }
    };

    utc.checked_add_signed(offset)
        .map(EventTime::DateTimeUtc)
        .ok_or_else(|| CalendarError::DateOutOfRange(value.to_string(), offset.to_string()))
}

fn localize(
    naive: NaiveDateTime,
    time_zone: Option<&str>,
    original: &str,
) -> CalendarResult<DateTime<Utc>> {
    let Some(name) = time_zone else {
        return Ok(naive.and_utc());
    };

    let tz: Tz = name
        .parse()
        .map_err(|_| CalendarError::UnknownTimeZone(name.to_string()))?;

    // DST overlaps resolve to the earlier instant; gaps have no instant at all.
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| CalendarError::NonexistentLocalTime(original.to_string(), name.to_string()))
}
