use crate::steam_api::api_error::ApiError;
use crate::steam_api::stats_source::StatsSource;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

pub const USER_STATS_ENDPOINT: &str = "GetUserStatsForGame";
pub const PLAYER_SUMMARIES_ENDPOINT: &str = "GetPlayerSummaries";
pub const FRIEND_LIST_ENDPOINT: &str = "GetFriendList";

/// HTTP client for the API gateway that proxies the Steam Web API.
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    /// Creates a client for the gateway stage at `base_url`,
    /// e.g. `https://<id>.execute-api.us-east-1.amazonaws.com/ProductionStage`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues `GET {base_url}/{endpoint}?steamid={steam_id}` and unwraps the gateway body.
    async fn get(&self, endpoint: &str, steam_id: &str) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        info!("Fetching {} for {}", endpoint, steam_id);

        let response = self
            .client
            .get(&url)
            .query(&[("steamid", steam_id)])
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to reach {endpoint}: {e}")))?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_owned(),
                status: response.status().as_u16(),
            });
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse {endpoint} response: {e}")))?;

        unwrap_gateway_body(envelope)
    }
}

#[async_trait]
impl StatsSource for GatewayClient {
    async fn fetch_user_stats(&self, steam_id: &str) -> Result<Value, ApiError> {
        self.get(USER_STATS_ENDPOINT, steam_id).await
    }

    async fn fetch_player_summaries(&self, steam_id: &str) -> Result<Value, ApiError> {
        self.get(PLAYER_SUMMARIES_ENDPOINT, steam_id).await
    }

    async fn fetch_friend_list(&self, steam_id: &str) -> Result<Value, ApiError> {
        self.get(FRIEND_LIST_ENDPOINT, steam_id).await
    }
}

/// Extracts the payload the gateway wraps as `{ "body": "<json string>" }`.
///
/// Responses without a string `body` are already the payload and are returned unchanged.
///
/// # Returns
///
/// The payload, or `ApiError::Decode` if `body` is not valid JSON.
pub fn unwrap_gateway_body(envelope: Value) -> Result<Value, ApiError> {
    match envelope.get("body").and_then(Value::as_str) {
        Some(body) => {
            debug!("Unwrapping gateway body of {} bytes", body.len());
            serde_json::from_str(body)
                .map_err(|e| ApiError::Decode(format!("Gateway body is not JSON: {e}")))
        }
        None => Ok(envelope),
    }
}
