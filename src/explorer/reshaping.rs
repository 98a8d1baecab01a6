use crate::chart_series::series_formatter::{
    to_bar_series, to_metric_bar_series, to_pie_series, with_display_names,
};
use crate::derived_metrics::metric_calculator::{format_metric, DerivedMetric};
use crate::display_formatting::friend_row::FriendRow;
use crate::explorer::stats_table::{
    ProfileView, RowMetrics, StatsDashboard, StatsTable, StatsView, GAME_NAME,
};
use crate::stat_aggregation::entity_catalog::{EntityCatalog, GENERAL_STATS_KEYS};
use crate::stat_aggregation::general_stats::{general_stats, GeneralStats};
use crate::stat_aggregation::stat_aggregator::aggregate;
use crate::stat_aggregation::stat_layout::{
    StatLayout, MAP_NAME, TOTAL_KILLS, TOTAL_ROUND_WINS, TOTAL_SHOTS, WEAPON_NAME,
};
use crate::stats_decoding::decode_error::DecodeError;
use crate::stats_decoding::payloads::PlayerSummary;
use crate::stats_decoding::stat_decoder::{decode_player_stats, decode_player_summaries};

use serde::Serialize;
use serde_json::Value;

/// Which stats page a payload is reshaped for.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StatsPage {
    Weapons,
    Maps,
}

/// Decodes and aggregates a stats payload into a table.
///
/// # Arguments
///
/// * `payload` - The raw `GetUserStatsForGame` body.
/// * `entity_keys` - Key enumeration of the table.
/// * `layout` - Field layout of the table.
///
/// # Returns
///
/// `StatsView::NoData` for accounts without stats, the table otherwise, or
/// `DecodeError::Malformed` for payloads of the wrong shape.
pub fn reshape_stats_table<K: AsRef<str>>(
    payload: &Value,
    entity_keys: &[K],
    layout: &StatLayout,
) -> Result<StatsView<StatsTable>, DecodeError> {
    let player_stats = match decode_player_stats(payload) {
        Ok(player_stats) => player_stats,
        Err(DecodeError::MissingPlayerStats) => return Ok(StatsView::NoData),
        Err(err) => return Err(err),
    };

    Ok(StatsView::Loaded(StatsTable {
        steam_id: player_stats.steam_id.unwrap_or_default(),
        game_name: GAME_NAME.to_owned(),
        stats: aggregate(&player_stats.entries, entity_keys, layout),
    }))
}

/// Reshapes a stats payload into the weapon or map dashboard.
///
/// Weapons plot kills per weapon as bars and shots as pie slices, with hit rate and bullets
/// per kill as metric columns. Maps plot the win rate as bars and round wins as pie slices,
/// with the win rate as metric column.
pub fn reshape_dashboard(
    payload: &Value,
    page: StatsPage,
) -> Result<StatsView<StatsDashboard>, DecodeError> {
    let (catalog, layout) = match page {
        StatsPage::Weapons => (EntityCatalog::weapons(), StatLayout::weapons()),
        StatsPage::Maps => (EntityCatalog::maps(), StatLayout::maps()),
    };

    let table = match reshape_stats_table(payload, &catalog.keys(), &layout)? {
        StatsView::NoData => return Ok(StatsView::NoData),
        StatsView::Loaded(table) => table,
    };

    let colors = catalog.color_map();
    let (metrics, bar_series, pie_series) = match page {
        StatsPage::Weapons => (
            vec![DerivedMetric::HitRate, DerivedMetric::BulletsPerKill],
            to_bar_series(&table.stats, WEAPON_NAME, TOTAL_KILLS, &colors),
            to_pie_series(&table.stats, WEAPON_NAME, TOTAL_SHOTS, &colors),
        ),
        StatsPage::Maps => (
            vec![DerivedMetric::WinRate],
            to_metric_bar_series(&table.stats, MAP_NAME, DerivedMetric::WinRate, &colors),
            to_pie_series(&table.stats, MAP_NAME, TOTAL_ROUND_WINS, &colors),
        ),
    };

    Ok(StatsView::Loaded(StatsDashboard {
        metrics: table
            .stats
            .iter()
            .map(|row| RowMetrics::for_row(row, &metrics))
            .collect(),
        bar_series: with_display_names(bar_series, &catalog),
        pie_series: with_display_names(pie_series, &catalog),
        table,
    }))
}

/// Looks up the profile page's account-wide stats.
pub fn reshape_general_stats(payload: &Value) -> Result<StatsView<GeneralStats>, DecodeError> {
    match decode_player_stats(payload) {
        Ok(player_stats) => Ok(StatsView::Loaded(general_stats(
            &player_stats.entries,
            &GENERAL_STATS_KEYS,
        ))),
        Err(DecodeError::MissingPlayerStats) => Ok(StatsView::NoData),
        Err(err) => Err(err),
    }
}

/// Builds the friend list rows from a friend list payload.
pub fn reshape_friends(payload: &Value) -> Result<Vec<FriendRow>, DecodeError> {
    Ok(decode_player_summaries(payload)?
        .iter()
        .map(FriendRow::from_summary)
        .collect())
}

/// Combines the independently fetched profile and stats payloads into the profile page.
///
/// # Returns
///
/// `DecodeError::MissingPlayers` if the summary payload has no player.
pub fn reshape_profile(
    summary_payload: &Value,
    stats_payload: &Value,
) -> Result<ProfileView, DecodeError> {
    let player: PlayerSummary = decode_player_summaries(summary_payload)?
        .into_iter()
        .next()
        .ok_or(DecodeError::MissingPlayers)?;
    let general_stats = reshape_general_stats(stats_payload)?;

    let kill_death_ratio = match &general_stats {
        StatsView::Loaded(stats) => {
            format_metric(DerivedMetric::KillDeathRatio.for_general_stats(stats))
        }
        StatsView::NoData => String::new(),
    };

    Ok(ProfileView {
        player: FriendRow::from_summary(&player),
        general_stats,
        kill_death_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_aggregation::stat_field::StatField;
    use serde_json::json;

    fn weapon_payload() -> Value {
        json!({
            "playerstats": {
                "steamID": "76561198000000000",
                "gameName": "ValveTestApp260",
                "stats": [
                    {"name": "total_kills", "value": 300},
                    {"name": "total_deaths", "value": 200},
                    {"name": "total_kills_ak47", "value": 120},
                    {"name": "total_shots_ak47", "value": 800},
                    {"name": "total_hits_ak47", "value": 400},
                    {"name": "total_wins_map_de_dust2", "value": 30},
                    {"name": "total_rounds_map_de_dust2", "value": 40}
                ]
            }
        })
    }

    #[test]
    fn weapon_dashboard_covers_every_weapon() {
        let dashboard = reshape_dashboard(&weapon_payload(), StatsPage::Weapons)
            .unwrap()
            .loaded()
            .unwrap();

        assert_eq!(dashboard.table.stats.len(), 33);
        assert_eq!(dashboard.table.steam_id, "76561198000000000");
        assert_eq!(dashboard.table.game_name, "CS:GO");
        assert_eq!(dashboard.metrics[0].get(DerivedMetric::HitRate), Some(50.0));
        assert_eq!(dashboard.metrics[1].get(DerivedMetric::HitRate), None);
        assert_eq!(dashboard.bar_series.len(), 1);
        assert_eq!(dashboard.bar_series[0].label, "AK-47");
        assert_eq!(dashboard.pie_series[0].value.as_f64(), Some(800.0));
    }

    #[test]
    fn weapon_bars_follow_kills_and_pie_follows_shots() {
        let payload = json!({"playerstats": {"stats": [
            {"name": "total_kills_awp", "value": 4}
        ]}});

        let dashboard = reshape_dashboard(&payload, StatsPage::Weapons)
            .unwrap()
            .loaded()
            .unwrap();

        assert_eq!(dashboard.bar_series.len(), 1);
        assert_eq!(dashboard.bar_series[0].id, "awp");
        assert!(dashboard.pie_series.is_empty());
    }

    #[test]
    fn map_dashboard_plots_win_rate() {
        let dashboard = reshape_dashboard(&weapon_payload(), StatsPage::Maps)
            .unwrap()
            .loaded()
            .unwrap();

        assert_eq!(dashboard.table.stats.len(), 14);
        assert_eq!(dashboard.bar_series.len(), 1);
        assert_eq!(dashboard.bar_series[0].label, "Dust II");
        assert_eq!(dashboard.bar_series[0].value.as_f64(), Some(75.0));
        assert_eq!(
            serde_json::to_value(&dashboard.metrics[0]).unwrap(),
            json!({"key": "dust2", "winRate": "75.00"})
        );
    }

    #[test]
    fn accounts_without_stats_have_no_data() {
        let view = reshape_dashboard(&json!({}), StatsPage::Weapons).unwrap();
        assert!(view.is_no_data());
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({"status": "noData"})
        );
    }

    #[test]
    fn profile_combines_summary_and_general_stats() {
        let summary = json!({"response": {"players": [
            {"steamid": "76561198000000000", "personaname": "alice",
             "personastate": 1, "communityvisibilitystate": 3, "lastlogoff": 0}
        ]}});

        let profile = reshape_profile(&summary, &weapon_payload()).unwrap();

        assert_eq!(profile.player.persona_name, "alice");
        assert_eq!(profile.player.last_seen, "Currently online");
        assert_eq!(profile.kill_death_ratio, "1.50");
        let stats = profile.general_stats.loaded().unwrap();
        assert_eq!(stats.get("total_kills").and_then(StatField::as_f64), Some(300.0));
        assert!(stats.get("total_mvps").is_some_and(StatField::is_missing));
    }

    #[test]
    fn profile_without_players_fails() {
        let err = reshape_profile(&json!({"response": {"players": []}}), &json!({})).unwrap_err();
        assert!(matches!(err, DecodeError::MissingPlayers));
    }

    #[test]
    fn friends_become_rows() {
        let payload = json!({"response": {"players": [
            {"steamid": "1", "personastate": 0, "communityvisibilitystate": 3},
            {"steamid": "2", "personastate": 2, "communityvisibilitystate": 1}
        ]}});

        let rows = reshape_friends(&payload).unwrap();

        let statuses: Vec<&str> = rows.iter().map(|row| row.status.as_str()).collect();
        assert_eq!(statuses, ["Offline", "Private"]);
    }
}
