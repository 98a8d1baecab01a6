use crate::chart_series::chart_series_entry::ChartSeriesEntry;
use crate::chart_series::color_map::ColorMap;
use crate::derived_metrics::metric_calculator::DerivedMetric;
use crate::stat_aggregation::aggregated_stat_row::AggregatedStatRow;
use crate::stat_aggregation::entity_catalog::EntityCatalog;
use crate::stats_decoding::stat_value::StatValue;

/// Builds a keyed bar series from aggregated rows.
///
/// Each bar is identified by its entity key, labelled with the row's `key_field` text, and
/// exposes its value under the entity key itself. Rows whose `value_field` is missing are left
/// out rather than drawn as zero-height bars.
///
/// # Arguments
///
/// * `rows` - The aggregated rows, in display order.
/// * `key_field` - The row field used as the bar label.
/// * `value_field` - The row field plotted.
/// * `colors` - Palette keyed by entity key.
///
/// # Returns
///
/// One `ChartSeriesEntry` per row with a reported value, in row order.
pub fn to_bar_series(
    rows: &[AggregatedStatRow],
    key_field: &str,
    value_field: &str,
    colors: &ColorMap,
) -> Vec<ChartSeriesEntry> {
    rows.iter()
        .filter_map(|row| {
            let value = row.get(value_field)?.value()?.clone();
            Some(ChartSeriesEntry {
                id: row.entity_key().to_owned(),
                label: row.text(key_field),
                metric_key: row.entity_key().to_owned(),
                metric_value: value.clone(),
                value,
                color: colors.color_for(row.entity_key()),
            })
        })
        .collect()
}

/// Builds a pie series from aggregated rows.
///
/// Slices are identified and labelled by the row's `id_field` text and expose their value under
/// `value_field`. Rows whose `value_field` is missing get no slice.
///
/// # Arguments
///
/// * `rows` - The aggregated rows, in display order.
/// * `id_field` - The row field used as slice id and label.
/// * `value_field` - The row field plotted.
/// * `colors` - Palette keyed by entity key.
///
/// # Returns
///
/// One `ChartSeriesEntry` per row with a reported value, in row order.
pub fn to_pie_series(
    rows: &[AggregatedStatRow],
    id_field: &str,
    value_field: &str,
    colors: &ColorMap,
) -> Vec<ChartSeriesEntry> {
    rows.iter()
        .filter_map(|row| {
            let value = row.get(value_field)?.value()?.clone();
            let id = row.text(id_field);
            Some(ChartSeriesEntry {
                label: id.clone(),
                id,
                metric_key: value_field.to_owned(),
                metric_value: value.clone(),
                value,
                color: colors.color_for(row.entity_key()),
            })
        })
        .collect()
}

/// Builds a keyed bar series of a derived metric, e.g. the win rate per map.
///
/// Rows where the metric is blank are left out.
pub fn to_metric_bar_series(
    rows: &[AggregatedStatRow],
    key_field: &str,
    metric: DerivedMetric,
    colors: &ColorMap,
) -> Vec<ChartSeriesEntry> {
    rows.iter()
        .filter_map(|row| {
            let value = StatValue::from(metric.for_row(row)?);
            Some(ChartSeriesEntry {
                id: row.entity_key().to_owned(),
                label: row.text(key_field),
                metric_key: row.entity_key().to_owned(),
                metric_value: value.clone(),
                value,
                color: colors.color_for(row.entity_key()),
            })
        })
        .collect()
}

/// Replaces entity-key labels with the catalog's display names.
pub fn with_display_names(
    series: Vec<ChartSeriesEntry>,
    catalog: &EntityCatalog,
) -> Vec<ChartSeriesEntry> {
    series
        .into_iter()
        .map(|entry| ChartSeriesEntry {
            label: catalog.display_name(&entry.label).to_owned(),
            ..entry
        })
        .collect()
}
