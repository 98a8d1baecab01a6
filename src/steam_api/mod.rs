pub mod api_error;
pub mod gateway_client;
pub mod stats_source;
