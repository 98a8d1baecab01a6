pub mod explorer_error;
pub mod explorer_service;
pub mod reshaping;
pub mod stats_table;
