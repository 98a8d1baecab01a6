use crate::stat_aggregation::aggregated_stat_row::AggregatedStatRow;
use crate::stat_aggregation::general_stats::GeneralStats;
use crate::stat_aggregation::stat_field::StatField;
use crate::stat_aggregation::stat_layout::{
    TOTAL_HITS, TOTAL_KILLS, TOTAL_ROUNDS, TOTAL_ROUND_WINS, TOTAL_SHOTS,
};

/// Whether a ratio is reported as a percentage or as a plain quotient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioKind {
    Percentage,
    Ratio,
}

/// Ratios shown next to the aggregated tables.
///
/// # Variants
///
/// * `WinRate` - `totalRoundWins / totalRounds`, as a percentage.
/// * `HitRate` - `totalHits / totalShots`, as a percentage.
/// * `BulletsPerKill` - `totalShots / totalKills`.
/// * `AverageDamagePerRound` - `totalDamage / totalRounds`.
/// * `KillDeathRatio` - `total_kills / total_deaths`, from the general stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedMetric {
    WinRate,
    HitRate,
    BulletsPerKill,
    AverageDamagePerRound,
    KillDeathRatio,
}

pub const TOTAL_DAMAGE: &str = "totalDamage";

impl DerivedMetric {
    /// Field names of the numerator and denominator.
    pub fn operands(self) -> (&'static str, &'static str) {
        match self {
            DerivedMetric::WinRate => (TOTAL_ROUND_WINS, TOTAL_ROUNDS),
            DerivedMetric::HitRate => (TOTAL_HITS, TOTAL_SHOTS),
            DerivedMetric::BulletsPerKill => (TOTAL_SHOTS, TOTAL_KILLS),
            DerivedMetric::AverageDamagePerRound => (TOTAL_DAMAGE, TOTAL_ROUNDS),
            DerivedMetric::KillDeathRatio => ("total_kills", "total_deaths"),
        }
    }

    /// Column name used when the metric is serialized next to a row.
    pub fn name(self) -> &'static str {
        match self {
            DerivedMetric::WinRate => "winRate",
            DerivedMetric::HitRate => "hitRate",
            DerivedMetric::BulletsPerKill => "bulletsPerKill",
            DerivedMetric::AverageDamagePerRound => "averageDamagePerRound",
            DerivedMetric::KillDeathRatio => "killDeathRatio",
        }
    }

    pub fn kind(self) -> RatioKind {
        match self {
            DerivedMetric::WinRate | DerivedMetric::HitRate => RatioKind::Percentage,
            DerivedMetric::BulletsPerKill
            | DerivedMetric::AverageDamagePerRound
            | DerivedMetric::KillDeathRatio => RatioKind::Ratio,
        }
    }

    /// Computes the metric for a row.
    ///
    /// # Returns
    ///
    /// `None` when the row does not track both operands or when [`compute_ratio`] is blank.
    pub fn for_row(self, row: &AggregatedStatRow) -> Option<f64> {
        let (numerator, denominator) = self.operands();
        compute_ratio(row.get(numerator)?, row.get(denominator)?, self.kind())
    }

    /// Computes the metric from the general stats.
    pub fn for_general_stats(self, stats: &GeneralStats) -> Option<f64> {
        let (numerator, denominator) = self.operands();
        compute_ratio(stats.get(numerator)?, stats.get(denominator)?, self.kind())
    }
}

/// Divides two stat fields.
///
/// # Arguments
///
/// * `numerator` - The dividend field.
/// * `denominator` - The divisor field.
/// * `kind` - `Percentage` multiplies the quotient by 100.
///
/// # Returns
///
/// The quotient rounded half-up to two decimals, or `None` if either field is missing or
/// non-numeric, or the denominator is zero. Never NaN or infinite.
pub fn compute_ratio(numerator: &StatField, denominator: &StatField, kind: RatioKind) -> Option<f64> {
    let numerator = numerator.as_f64()?;
    let denominator = denominator.as_f64()?;
    if denominator == 0.0 {
        return None;
    }

    let quotient = match kind {
        RatioKind::Percentage => numerator / denominator * 100.0,
        RatioKind::Ratio => numerator / denominator,
    };
    let rounded = round2(quotient);
    rounded.is_finite().then_some(rounded)
}

/// Rounds to two decimals, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders a metric the way the tables show it: two decimals, or blank.
pub fn format_metric(metric: Option<f64>) -> String {
    metric.map_or_else(String::new, |value| format!("{:.2}", value))
}
