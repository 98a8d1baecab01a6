use thiserror::Error;

/// Errors raised while talking to the stats backend.
///
/// # Variants
///
/// * `Network` - The request could not be sent or its body could not be read.
/// * `Status` - The backend answered with a non-success status.
/// * `Decode` - The response body is not the JSON the endpoint promises.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("invalid response body: {0}")]
    Decode(String),
}
