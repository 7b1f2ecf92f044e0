//! Resolves the server's configured timezone into offsets and local dates.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// The current UTC offset of `canonical_timezone`, e.g. "Asia/Kolkata".
///
/// Returns `None` if the name is not a known IANA timezone.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's date in `canonical_timezone`.
pub fn get_local_date(canonical_timezone: &str) -> Option<Date> {
    let offset = get_local_offset(canonical_timezone)?;

    Some(OffsetDateTime::now_utc().to_offset(offset).date())
}

#[cfg(test)]
mod tests {
    use time::{OffsetDateTime, UtcOffset};

    use super::{get_local_date, get_local_offset};

    #[test]
    fn utc_has_zero_offset() {
        assert_eq!(get_local_offset("Etc/UTC"), Some(UtcOffset::UTC));
    }

    #[test]
    fn kolkata_has_fixed_offset() {
        assert_eq!(
            get_local_offset("Asia/Kolkata"),
            Some(UtcOffset::from_hms(5, 30, 0).unwrap())
        );
    }

    #[test]
    fn unknown_timezone_has_no_offset() {
        assert_eq!(get_local_offset("Mars/Olympus_Mons"), None);
        assert_eq!(get_local_date("Mars/Olympus_Mons"), None);
    }

    #[test]
    fn local_date_in_utc_is_today() {
        let before = OffsetDateTime::now_utc().date();
        let got = get_local_date("Etc/UTC").unwrap();
        let after = OffsetDateTime::now_utc().date();

        assert!(got == before || got == after);
    }
}
