//! API contract error types.

use thiserror::Error;

/// Errors raised while decoding API payloads.
#[derive(Error, Debug)]
pub enum ContractError {
    /// The backend reported an error.
    #[error("API error: {0}")]
    Api(String),

    /// A successful envelope arrived without its data field.
    #[error("Response missing data")]
    MissingData,

    /// The payload did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ContractError {
    fn from(e: serde_json::Error) -> Self {
        ContractError::Decode(e.to_string())
    }
}
