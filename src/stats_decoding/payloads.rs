use crate::stats_decoding::raw_stat_entry::RawStatEntry;
use serde::{Deserialize, Serialize};

/// Body of a `GetUserStatsForGame` response.
///
/// `playerstats` is absent when the account has no recorded stats for the game.
#[derive(Deserialize, Debug)]
pub struct UserStatsPayload {
    #[serde(default)]
    pub playerstats: Option<PlayerStatsEnvelope>,
}

/// The `playerstats` object of a stats response.
///
/// # Fields
///
/// * `steam_id` - The account the stats belong to.
/// * `game_name` - The game name reported by the API, if any.
/// * `stats` - The flat list of stat records, absent for accounts without stats.
#[derive(Deserialize, Debug)]
pub struct PlayerStatsEnvelope {
    #[serde(rename = "steamID", default)]
    pub steam_id: Option<String>,
    #[serde(rename = "gameName", default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub stats: Option<Vec<RawStatEntry>>,
}

/// Decoded stats of one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub steam_id: Option<String>,
    pub game_name: Option<String>,
    pub entries: Vec<RawStatEntry>,
}

/// Body of a `GetPlayerSummaries` or `GetFriendList` response.
#[derive(Deserialize, Debug)]
pub struct PlayerSummariesPayload {
    #[serde(default)]
    pub response: Option<PlayerSummariesResponse>,
}

#[derive(Deserialize, Debug)]
pub struct PlayerSummariesResponse {
    #[serde(default)]
    pub players: Option<Vec<PlayerSummary>>,
}

/// Public profile data of a Steam account.
///
/// Only `steamid` is guaranteed, private profiles omit most of the rest.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PlayerSummary {
    pub steamid: String,
    #[serde(default)]
    pub personaname: Option<String>,
    #[serde(default)]
    pub profileurl: Option<String>,
    #[serde(default)]
    pub avatarfull: Option<String>,
    #[serde(default)]
    pub personastate: Option<i64>,
    #[serde(default)]
    pub communityvisibilitystate: Option<i64>,
    #[serde(default)]
    pub lastlogoff: Option<i64>,
    #[serde(default)]
    pub timecreated: Option<i64>,
    #[serde(default)]
    pub loccountrycode: Option<String>,
}
