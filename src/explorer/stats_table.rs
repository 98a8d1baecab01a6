use crate::chart_series::chart_series_entry::ChartSeriesEntry;
use crate::derived_metrics::metric_calculator::{format_metric, DerivedMetric};
use crate::display_formatting::friend_row::FriendRow;
use crate::stat_aggregation::aggregated_stat_row::AggregatedStatRow;
use crate::stat_aggregation::general_stats::GeneralStats;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Game name attached to every reshaped table.
pub const GAME_NAME: &str = "CS:GO";

/// Result of reshaping one response. `NoData` is the answer for accounts without stats.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", content = "data", rename_all = "camelCase")]
pub enum StatsView<T> {
    NoData,
    Loaded(T),
}

impl<T> StatsView<T> {
    pub fn loaded(self) -> Option<T> {
        match self {
            StatsView::NoData => None,
            StatsView::Loaded(data) => Some(data),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, StatsView::NoData)
    }
}

/// Rows of one stats table with the account they belong to.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatsTable {
    #[serde(rename = "steamID")]
    pub steam_id: String,
    #[serde(rename = "gameName")]
    pub game_name: String,
    pub stats: Vec<AggregatedStatRow>,
}

/// Derived metrics of one row, serialized as `{ "key": "ak47", "hitRate": "50.00", ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct RowMetrics {
    pub entity_key: String,
    pub values: Vec<(DerivedMetric, Option<f64>)>,
}

impl RowMetrics {
    pub fn for_row(row: &AggregatedStatRow, metrics: &[DerivedMetric]) -> Self {
        Self {
            entity_key: row.entity_key().to_owned(),
            values: metrics
                .iter()
                .map(|metric| (*metric, metric.for_row(row)))
                .collect(),
        }
    }

    pub fn get(&self, metric: DerivedMetric) -> Option<f64> {
        self.values
            .iter()
            .find(|(candidate, _)| *candidate == metric)
            .and_then(|(_, value)| *value)
    }
}

impl Serialize for RowMetrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("key", &self.entity_key)?;
        for (metric, value) in &self.values {
            map.serialize_entry(metric.name(), &format_metric(*value))?;
        }
        map.end()
    }
}

/// Everything a stats page shows: the table, its metric columns and both charts.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsDashboard {
    pub table: StatsTable,
    pub metrics: Vec<RowMetrics>,
    pub bar_series: Vec<ChartSeriesEntry>,
    pub pie_series: Vec<ChartSeriesEntry>,
}

/// The profile page: the player's summary and account-wide stats.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub player: FriendRow,
    pub general_stats: StatsView<GeneralStats>,
    pub kill_death_ratio: String,
}
