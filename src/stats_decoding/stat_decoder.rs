use crate::stats_decoding::decode_error::DecodeError;
use crate::stats_decoding::payloads::{
    PlayerStats, PlayerSummariesPayload, PlayerSummary, UserStatsPayload,
};
use crate::stats_decoding::raw_stat_entry::RawStatEntry;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Extracts the flat stat records from a stats payload.
///
/// # Arguments
///
/// * `raw_payload` - The parsed JSON body of a `GetUserStatsForGame` response.
///
/// # Returns
///
/// * `Ok(entries)` - The `playerstats.stats` array, unchanged.
/// * `Err(DecodeError::MissingPlayerStats)` - The payload has no `playerstats` object or no `stats` array.
/// * `Err(DecodeError::Malformed)` - The stats array does not hold `{name, value}` records.
pub fn decode(raw_payload: &Value) -> Result<Vec<RawStatEntry>, DecodeError> {
    decode_player_stats(raw_payload).map(|player_stats| player_stats.entries)
}

/// Decodes a stats payload given as a JSON string.
pub fn decode_str(body: &str) -> Result<Vec<RawStatEntry>, DecodeError> {
    let raw_payload: Value = serde_json::from_str(body)?;
    decode(&raw_payload)
}

/// Decodes a stats payload keeping the envelope's account information.
///
/// # Arguments
///
/// * `raw_payload` - The parsed JSON body of a `GetUserStatsForGame` response.
///
/// # Returns
///
/// A `PlayerStats` with the Steam ID, game name and stat records, or the same errors as [`decode`].
pub fn decode_player_stats(raw_payload: &Value) -> Result<PlayerStats, DecodeError> {
    let payload = UserStatsPayload::deserialize(raw_payload)?;
    let envelope = payload.playerstats.ok_or(DecodeError::MissingPlayerStats)?;
    let entries = envelope.stats.ok_or(DecodeError::MissingPlayerStats)?;

    debug!(
        "Decoded {} stat records for {:?}",
        entries.len(),
        envelope.steam_id
    );

    Ok(PlayerStats {
        steam_id: envelope.steam_id,
        game_name: envelope.game_name,
        entries,
    })
}

/// Extracts the player list from a profile or friend list payload.
///
/// # Arguments
///
/// * `raw_payload` - The parsed JSON body, shaped `{ response: { players: [...] } }`.
///
/// # Returns
///
/// * `Ok(players)` - The player summaries in response order.
/// * `Err(DecodeError::MissingPlayers)` - `response.players` is absent.
/// * `Err(DecodeError::Malformed)` - A player record lacks `steamid` or has mistyped fields.
pub fn decode_player_summaries(raw_payload: &Value) -> Result<Vec<PlayerSummary>, DecodeError> {
    let payload = PlayerSummariesPayload::deserialize(raw_payload)?;
    payload
        .response
        .and_then(|response| response.players)
        .ok_or(DecodeError::MissingPlayers)
}
