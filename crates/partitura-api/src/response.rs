//! API response envelopes.

use crate::ContractError;
use partitura_commerce::catalog::Score;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Pagination metadata as the backend sends it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    /// Total matching records.
    pub total: i64,
    /// Current page (1-indexed).
    pub page: i64,
    /// Records per page.
    pub per_page: i64,
    /// Total pages.
    pub total_pages: i64,
}

/// The `GET /api/scores` payload: records plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreList {
    /// The scores on this page.
    pub data: Vec<Score>,
    /// Pagination metadata.
    pub meta: ListMeta,
}

impl ScoreList {
    /// Decode a listing payload from JSON.
    pub fn from_json(json: &str) -> Result<Self, ContractError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The general response envelope used by the non-listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// The payload, on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error description, on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Pagination metadata, for list payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ListMeta>,
}

impl<T> ApiResponse<T> {
    /// Build a success envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            meta: None,
        }
    }

    /// Build a success envelope with pagination metadata.
    pub fn ok_with_meta(data: T, meta: ListMeta) -> Self {
        Self {
            meta: Some(meta),
            ..Self::ok(data)
        }
    }

    /// Build an error envelope.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
            meta: None,
        }
    }

    /// Unwrap the envelope into a result.
    pub fn into_result(self) -> Result<T, ContractError> {
        if !self.success {
            return Err(ContractError::Api(
                self.error
                    .or(self.message)
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        self.data.ok_or(ContractError::MissingData)
    }
}

impl<T: DeserializeOwned + Default> ApiResponse<T> {
    /// Decode an envelope from JSON.
    pub fn from_json(json: &str) -> Result<Self, ContractError> {
        Ok(serde_json::from_str(json)?)
    }
}
