use crate::display_formatting::persona_status::PersonaStatus;
use crate::display_formatting::timestamp_formatter::{format_last_seen_in, format_timestamp_in};
use crate::stats_decoding::payloads::PlayerSummary;

use chrono::{Local, TimeZone};
use serde::Serialize;

/// One line of the friend list table.
///
/// # Fields
///
/// * `steam_id` - The friend's account.
/// * `persona_name` - Display name, empty when hidden.
/// * `avatar` - Full-size avatar URL, empty when hidden.
/// * `profile_url` - Community profile URL, empty when hidden.
/// * `status` - Online status.
/// * `last_seen` - `"Currently online"`, the last logoff time, or empty.
/// * `account_created` - Account creation time, or empty.
/// * `country_code` - ISO 3166-1 alpha-2 country code as reported, empty when hidden.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FriendRow {
    pub steam_id: String,
    pub persona_name: String,
    pub avatar: String,
    pub profile_url: String,
    pub status: String,
    pub last_seen: String,
    pub account_created: String,
    pub country_code: String,
}

impl FriendRow {
    /// Builds a row in the host's local time zone.
    pub fn from_summary(summary: &PlayerSummary) -> Self {
        Self::from_summary_in(summary, &Local)
    }

    /// Builds a row, rendering times in `tz`.
    ///
    /// A summary without a visibility code is shown as `Private`, a public one without a
    /// state code as `Offline`. The last-seen column stays blank unless the logoff time and
    /// both codes are present.
    pub fn from_summary_in<Tz: TimeZone>(summary: &PlayerSummary, tz: &Tz) -> Self {
        let status = match summary.communityvisibilitystate {
            Some(visibility) => {
                PersonaStatus::from_codes(summary.personastate.unwrap_or(-1), visibility)
            }
            None => PersonaStatus::Private,
        };
        let last_seen = match (
            summary.lastlogoff,
            summary.personastate,
            summary.communityvisibilitystate,
        ) {
            (Some(last_logoff), Some(_), Some(_)) => {
                format_last_seen_in(Some(last_logoff), status, tz)
            }
            _ => String::new(),
        };

        Self {
            steam_id: summary.steamid.clone(),
            persona_name: summary.personaname.clone().unwrap_or_default(),
            avatar: summary.avatarfull.clone().unwrap_or_default(),
            profile_url: summary.profileurl.clone().unwrap_or_default(),
            status: status.label().to_owned(),
            last_seen,
            account_created: summary
                .timecreated
                .map(|seconds| format_timestamp_in(seconds, tz))
                .unwrap_or_default(),
            country_code: summary.loccountrycode.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn summary(state: i64, visibility: i64) -> PlayerSummary {
        PlayerSummary {
            steamid: "76561198000000001".to_owned(),
            personaname: Some("bob".to_owned()),
            personastate: Some(state),
            communityvisibilitystate: Some(visibility),
            lastlogoff: Some(1_608_919_509),
            timecreated: Some(0),
            loccountrycode: Some("AR".to_owned()),
            ..PlayerSummary::default()
        }
    }

    #[test]
    fn online_public_friend() {
        let row = FriendRow::from_summary_in(&summary(1, 3), &Utc);

        assert_eq!(row.status, "Online");
        assert_eq!(row.last_seen, "Currently online");
        assert_eq!(row.account_created, "1/1/1970 - 0:00:00");
        assert_eq!(row.country_code, "AR");
    }

    #[test]
    fn private_friend_shows_last_logoff() {
        let row = FriendRow::from_summary_in(&summary(1, 1), &Utc);

        assert_eq!(row.status, "Private");
        assert_eq!(row.last_seen, "12/25/2020 - 18:05:09");
    }

    #[test]
    fn public_friend_without_state_is_offline() {
        let summary = PlayerSummary {
            steamid: "3".to_owned(),
            communityvisibilitystate: Some(3),
            lastlogoff: Some(0),
            ..PlayerSummary::default()
        };

        let row = FriendRow::from_summary_in(&summary, &Utc);

        assert_eq!(row.status, "Offline");
        assert_eq!(row.last_seen, "");
    }

    #[test]
    fn online_friend_without_logoff_has_blank_last_seen() {
        let summary = PlayerSummary {
            steamid: "4".to_owned(),
            personastate: Some(1),
            communityvisibilitystate: Some(3),
            ..PlayerSummary::default()
        };

        let row = FriendRow::from_summary_in(&summary, &Utc);

        assert_eq!(row.status, "Online");
        assert_eq!(row.last_seen, "");
    }

    #[test]
    fn hidden_fields_are_blank() {
        let summary = PlayerSummary {
            steamid: "1".to_owned(),
            ..PlayerSummary::default()
        };

        let row = FriendRow::from_summary_in(&summary, &Utc);

        assert_eq!(row.status, "Private");
        assert_eq!(row.persona_name, "");
        assert_eq!(row.last_seen, "");
        assert_eq!(row.account_created, "");
        assert_eq!(
            serde_json::to_value(&row).unwrap()["steamId"],
            serde_json::json!("1")
        );
    }
}
