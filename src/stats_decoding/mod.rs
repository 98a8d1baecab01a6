pub mod decode_error;
pub mod payloads;
pub mod raw_stat_entry;
pub mod stat_decoder;
pub mod stat_value;
