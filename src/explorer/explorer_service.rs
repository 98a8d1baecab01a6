use crate::display_formatting::friend_row::FriendRow;
use crate::explorer::explorer_error::ExplorerError;
use crate::explorer::reshaping::{
    reshape_dashboard, reshape_friends, reshape_general_stats, reshape_profile, StatsPage,
};
use crate::explorer::stats_table::{ProfileView, StatsDashboard, StatsView};
use crate::stat_aggregation::general_stats::GeneralStats;
use crate::steam_api::stats_source::StatsSource;

use tracing::info;

/// Fetches payloads from a [`StatsSource`] and reshapes each completed response.
///
/// Nothing is cached, every call re-fetches and re-derives.
pub struct Explorer<S: StatsSource> {
    source: S,
}

impl<S: StatsSource> Explorer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The weapon or map stats page of `steam_id`.
    pub async fn dashboard(
        &self,
        steam_id: &str,
        page: StatsPage,
    ) -> Result<StatsView<StatsDashboard>, ExplorerError> {
        let payload = self.source.fetch_user_stats(steam_id).await?;
        let view = reshape_dashboard(&payload, page)?;
        if view.is_no_data() {
            info!("No stats recorded for {}", steam_id);
        }
        Ok(view)
    }

    pub async fn weapon_stats(
        &self,
        steam_id: &str,
    ) -> Result<StatsView<StatsDashboard>, ExplorerError> {
        self.dashboard(steam_id, StatsPage::Weapons).await
    }

    pub async fn map_stats(
        &self,
        steam_id: &str,
    ) -> Result<StatsView<StatsDashboard>, ExplorerError> {
        self.dashboard(steam_id, StatsPage::Maps).await
    }

    pub async fn general_stats(
        &self,
        steam_id: &str,
    ) -> Result<StatsView<GeneralStats>, ExplorerError> {
        let payload = self.source.fetch_user_stats(steam_id).await?;
        Ok(reshape_general_stats(&payload)?)
    }

    pub async fn friends(&self, steam_id: &str) -> Result<Vec<FriendRow>, ExplorerError> {
        let payload = self.source.fetch_friend_list(steam_id).await?;
        Ok(reshape_friends(&payload)?)
    }

    /// The profile page. The summary and stats requests run concurrently, either may finish first.
    pub async fn profile(&self, steam_id: &str) -> Result<ProfileView, ExplorerError> {
        let (summary, stats) = tokio::join!(
            self.source.fetch_player_summaries(steam_id),
            self.source.fetch_user_stats(steam_id)
        );
        Ok(reshape_profile(&summary?, &stats?)?)
    }
}
