use thiserror::Error;

/// Errors that may occur while decoding a raw API payload.
///
/// # Variants
///
/// * `MissingPlayerStats` - The payload has no `playerstats.stats` array. This is the expected
///     answer for an account without recorded stats, callers show a "no data" state for it.
/// * `MissingPlayers` - A profile or friend payload has no `response.players` array.
/// * `Malformed` - The envelope is present but its content does not have the expected shape.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("payload has no player stats")]
    MissingPlayerStats,

    #[error("payload has no player list")]
    MissingPlayers,

    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl DecodeError {
    /// Whether this error is the "player has no stats for this game" condition.
    pub fn is_missing_stats(&self) -> bool {
        matches!(self, DecodeError::MissingPlayerStats)
    }
}
