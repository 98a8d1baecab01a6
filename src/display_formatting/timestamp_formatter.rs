use crate::display_formatting::persona_status::PersonaStatus;

use chrono::{Datelike, Local, TimeZone, Timelike};
use tracing::warn;

pub const CURRENTLY_ONLINE: &str = "Currently online";

/// Formats a Unix timestamp in the host's local time zone.
///
/// See [`format_timestamp_in`] for the format.
pub fn format_timestamp(unix_seconds: i64) -> String {
    format_timestamp_in(unix_seconds, &Local)
}

/// Formats a Unix timestamp as `M/D/YYYY - H:MM:SS` in the given time zone.
///
/// Month, day and hour are not zero-padded, minutes and seconds always are:
/// `1/1/1970 - 0:00:00`, `12/25/2020 - 18:05:09`.
///
/// # Arguments
///
/// * `unix_seconds` - Seconds since the Unix epoch.
/// * `tz` - The time zone the date is rendered in.
///
/// # Returns
///
/// The formatted date, or an empty string if the timestamp is out of range.
pub fn format_timestamp_in<Tz: TimeZone>(unix_seconds: i64, tz: &Tz) -> String {
    match tz.timestamp_opt(unix_seconds, 0).single() {
        Some(date) => format!(
            "{}/{}/{} - {}:{:02}:{:02}",
            date.month(),
            date.day(),
            date.year(),
            date.hour(),
            date.minute(),
            date.second()
        ),
        None => {
            warn!("Timestamp {} is out of range", unix_seconds);
            String::new()
        }
    }
}

/// Formats the "last seen" column of the friend list.
///
/// # Arguments
///
/// * `last_logoff` - Unix timestamp of the last logoff, if the profile exposes it.
/// * `status` - The account status.
/// * `tz` - The time zone the date is rendered in.
///
/// # Returns
///
/// `"Currently online"` for online accounts, the formatted logoff time otherwise, or an empty
/// string when the logoff time is unknown.
pub fn format_last_seen_in<Tz: TimeZone>(
    last_logoff: Option<i64>,
    status: PersonaStatus,
    tz: &Tz,
) -> String {
    if status == PersonaStatus::Online {
        return CURRENTLY_ONLINE.to_owned();
    }
    last_logoff
        .map(|seconds| format_timestamp_in(seconds, tz))
        .unwrap_or_default()
}

/// [`format_last_seen_in`] in the host's local time zone.
pub fn format_last_seen(last_logoff: Option<i64>, status: PersonaStatus) -> String {
    format_last_seen_in(last_logoff, status, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn epoch_in_utc() {
        assert_eq!(format_timestamp_in(0, &Utc), "1/1/1970 - 0:00:00");
    }

    #[test]
    fn pads_only_minutes_and_seconds() {
        // 2020-12-25T18:05:09Z
        assert_eq!(format_timestamp_in(1_608_919_509, &Utc), "12/25/2020 - 18:05:09");
        // 2021-03-04T05:06:07Z
        assert_eq!(format_timestamp_in(1_614_834_367, &Utc), "3/4/2021 - 5:06:07");
    }

    #[test]
    fn respects_the_time_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_timestamp_in(0, &tz), "1/1/1970 - 2:00:00");
    }

    #[test]
    fn out_of_range_is_blank() {
        assert_eq!(format_timestamp_in(i64::MAX, &Utc), "");
    }

    #[test]
    fn online_accounts_are_currently_online() {
        assert_eq!(
            format_last_seen_in(Some(0), PersonaStatus::Online, &Utc),
            CURRENTLY_ONLINE
        );
        assert_eq!(
            format_last_seen_in(Some(0), PersonaStatus::Away, &Utc),
            "1/1/1970 - 0:00:00"
        );
        assert_eq!(format_last_seen_in(None, PersonaStatus::Offline, &Utc), "");
    }

    #[test]
    fn timestamp_alone_never_says_online() {
        assert_ne!(format_timestamp_in(0, &Utc), CURRENTLY_ONLINE);
    }
}
