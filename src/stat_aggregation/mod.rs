pub mod aggregated_stat_row;
pub mod entity_catalog;
pub mod general_stats;
pub mod stat_aggregator;
pub mod stat_field;
pub mod stat_layout;
