use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::constants::Constants;
use crate::error::{FleetError, Result};

/// Format a calendar date as `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(Constants::ISO_DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), Constants::ISO_DATE_FORMAT)
        .map_err(|e| FleetError::invalid(format!("malformed ISO date '{}': {}", value, e)))
}

/// Calendar date of a UTC instant as seen in `tz`
pub fn date_in_zone(utc_time: DateTime<Utc>, tz: Tz) -> NaiveDate {
    utc_time.with_timezone(&tz).date_naive()
}

/// Parse an IANA zone name such as `Asia/Kolkata`
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| FleetError::invalid(format!("unknown time zone '{}': {}", name, e)))
}

/// Next-available date reported when no unit is free.
///
/// This is a stand-in of "tomorrow"; it is not derived from allocation return dates.
pub fn next_available_placeholder(today: NaiveDate) -> Result<NaiveDate> {
    today
        .checked_add_days(Days::new(1))
        .ok_or_else(|| FleetError::invalid(format!("no calendar date after {}", today)))
}
