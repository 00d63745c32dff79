//! API request and response types

use serde::{Deserialize, Serialize};

/// Request body for `get_train_status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainStatusRequest {
    pub train_number: String,
}

/// Response for the version endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
