pub mod chart_series_entry;
pub mod color_map;
pub mod series_formatter;
