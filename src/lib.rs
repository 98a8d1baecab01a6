pub mod chart_series;
pub mod config;
pub mod data_processing;
pub mod derived_metrics;
pub mod display_formatting;
pub mod explorer;
pub mod logging;
pub mod report_creation;
pub mod session;
pub mod stat_aggregation;
pub mod stats_decoding;
pub mod steam_api;

pub use chart_series::chart_series_entry::ChartSeriesEntry;
pub use chart_series::color_map::ColorMap;
pub use chart_series::series_formatter::{to_bar_series, to_metric_bar_series, to_pie_series};
pub use derived_metrics::metric_calculator::{compute_ratio, DerivedMetric, RatioKind};
pub use display_formatting::persona_status::{persona_status, PersonaStatus};
pub use display_formatting::timestamp_formatter::{format_timestamp, format_timestamp_in};
pub use stat_aggregation::aggregated_stat_row::AggregatedStatRow;
pub use stat_aggregation::stat_aggregator::aggregate;
pub use stat_aggregation::stat_field::StatField;
pub use stat_aggregation::stat_layout::StatLayout;
pub use stats_decoding::decode_error::DecodeError;
pub use stats_decoding::raw_stat_entry::RawStatEntry;
pub use stats_decoding::stat_decoder::decode;
pub use stats_decoding::stat_value::StatValue;
