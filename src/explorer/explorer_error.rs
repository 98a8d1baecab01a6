use crate::stats_decoding::decode_error::DecodeError;
use crate::steam_api::api_error::ApiError;

use thiserror::Error;

/// Errors of a fetch-then-reshape round trip.
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
