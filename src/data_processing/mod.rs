pub mod data_processor;
pub mod payload_summary;
