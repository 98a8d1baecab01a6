use crate::steam_api::api_error::ApiError;

use async_trait::async_trait;
use serde_json::Value;

/// Source of raw Steam payloads.
///
/// Each call is independent, callers must not assume any ordering between them.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Raw `GetUserStatsForGame` body for `steam_id`.
    async fn fetch_user_stats(&self, steam_id: &str) -> Result<Value, ApiError>;

    /// Raw `GetPlayerSummaries` body for `steam_id`.
    async fn fetch_player_summaries(&self, steam_id: &str) -> Result<Value, ApiError>;

    /// Raw friend list body for `steam_id`, with the friends' summaries.
    async fn fetch_friend_list(&self, steam_id: &str) -> Result<Value, ApiError>;
}
