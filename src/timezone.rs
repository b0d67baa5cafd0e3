//! Resolving the configured timezone to work out the local date.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// Get the current UTC offset of a canonical timezone, e.g. "Pacific/Auckland".
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Get today's date in `canonical_timezone`.
///
/// # Errors
/// Returns an [Error::InvalidTimezoneError] if `canonical_timezone` is not a
/// known timezone.
pub fn local_today(canonical_timezone: &str) -> Result<Date, Error> {
    let offset = get_local_offset(canonical_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", canonical_timezone);
        Error::InvalidTimezoneError(canonical_timezone.to_owned())
    })?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{get_local_offset, local_today};

    #[test]
    fn utc_has_zero_offset() {
        assert_eq!(get_local_offset("Etc/UTC").map(|offset| offset.is_utc()), Some(true));
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        assert_eq!(
            local_today("Not/AZone"),
            Err(Error::InvalidTimezoneError("Not/AZone".to_owned()))
        );
    }

    #[test]
    fn known_timezone_gives_a_date() {
        assert!(local_today("Pacific/Auckland").is_ok());
    }
}
