//! Client side of the lookup service's tool endpoints

use crate::api::TrainStatusRequest;
use crate::lookup::{TrainRecord, GET_TRAIN_STATUS};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Failure while calling a tool
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToolCallError {
    #[error("Could not connect to the MCP server. Please ensure it is running.")]
    Connect,
    #[error("HTTP error occurred: {status} - {body}")]
    Http { status: u16, body: String },
    #[error("Received non-JSON response from server.")]
    NonJson,
    /// The tool answered successfully but reported an error in its payload
    #[error("{0}")]
    Reported(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Invokes named tools with a JSON payload
#[async_trait]
pub trait ToolClient: Send + Sync {
    async fn call_tool(&self, name: &str, payload: Value) -> Result<Value, ToolCallError>;

    /// Typed wrapper over the `get_train_status` tool
    async fn get_train_status(&self, train_number: &str) -> Result<TrainRecord, ToolCallError> {
        let payload = serde_json::to_value(TrainStatusRequest {
            train_number: train_number.to_string(),
        })
        .map_err(|e| ToolCallError::Unexpected(e.to_string()))?;

        let response = self.call_tool(GET_TRAIN_STATUS, payload).await?;
        if let Some(error) = response.get("error") {
            let message = error
                .as_str()
                .map_or_else(|| error.to_string(), str::to_string);
            return Err(ToolCallError::Reported(message));
        }
        serde_json::from_value(response).map_err(|e| ToolCallError::Unexpected(e.to_string()))
    }
}

/// Calls tools over HTTP at `<base_url>/tool/<name>`
pub struct HttpToolClient {
    client: Client,
    base_url: String,
}

impl HttpToolClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn tool_url(&self, name: &str) -> String {
        format!("{}/tool/{name}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ToolClient for HttpToolClient {
    async fn call_tool(&self, name: &str, payload: Value) -> Result<Value, ToolCallError> {
        let url = self.tool_url(name);
        tracing::info!(tool = name, url = %url, payload = %payload, "Calling tool");

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    tracing::error!(tool = name, "Could not connect to the lookup service");
                    ToolCallError::Connect
                } else {
                    tracing::error!(tool = name, error = %e, "Tool request failed");
                    ToolCallError::Unexpected(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ToolCallError::Unexpected(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(tool = name, status = status.as_u16(), body = %body, "Tool returned HTTP error");
            return Err(ToolCallError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let value = serde_json::from_str(&body).map_err(|_| {
            tracing::error!(tool = name, body = %body, "Tool returned non-JSON response");
            ToolCallError::NonJson
        })?;
        tracing::info!(tool = name, "Received tool response");
        Ok(value)
    }
}
