/// Row field names used by the weapon and map tables.
pub const WEAPON_NAME: &str = "weaponName";
pub const TOTAL_KILLS: &str = "totalKills";
pub const TOTAL_SHOTS: &str = "totalShots";
pub const TOTAL_HITS: &str = "totalHits";
pub const MAP_NAME: &str = "mapName";
pub const TOTAL_ROUNDS: &str = "totalRounds";
pub const TOTAL_ROUND_WINS: &str = "totalRoundWins";

/// Association between a row field and the stat-name fragment that feeds it.
///
/// # Fields
///
/// * `field` - The row field name, e.g. `totalKills`.
/// * `fragment` - The substring a stat name must contain to feed this field, e.g. `total_kills`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricFragment {
    pub field: String,
    pub fragment: String,
}

/// Shape of the rows produced by the aggregator.
///
/// # Fields
///
/// * `key_field` - Name of the field holding the entity key, e.g. `weaponName`.
/// * `metrics` - Tracked fields, in row order. When a stat name contains several
///     fragments, the first one in this list decides the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLayout {
    pub key_field: String,
    pub metrics: Vec<MetricFragment>,
}

impl StatLayout {
    pub fn new(key_field: &str, metrics: &[(&str, &str)]) -> Self {
        Self {
            key_field: key_field.to_owned(),
            metrics: metrics
                .iter()
                .map(|(field, fragment)| MetricFragment {
                    field: (*field).to_owned(),
                    fragment: (*fragment).to_owned(),
                })
                .collect(),
        }
    }

    /// Kills, shots and hits per weapon.
    pub fn weapons() -> Self {
        Self::new(
            WEAPON_NAME,
            &[
                (TOTAL_KILLS, "total_kills"),
                (TOTAL_SHOTS, "total_shots"),
                (TOTAL_HITS, "total_hits"),
            ],
        )
    }

    /// Rounds played and rounds won per map.
    pub fn maps() -> Self {
        Self::new(
            MAP_NAME,
            &[
                (TOTAL_ROUNDS, "total_rounds_map"),
                (TOTAL_ROUND_WINS, "total_wins_map"),
            ],
        )
    }

    /// Returns the field fed by a stat name, if the name contains any configured fragment.
    pub fn field_for(&self, stat_name: &str) -> Option<&str> {
        self.metrics
            .iter()
            .find(|metric| stat_name.contains(metric.fragment.as_str()))
            .map(|metric| metric.field.as_str())
    }
}
