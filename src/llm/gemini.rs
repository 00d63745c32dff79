//! Google Gemini classifier
//!
//! Sends the query inside a structured prompt and constrains the answer with
//! a `responseSchema`, so the first text part of the first candidate is
//! itself a JSON document.

use super::types::IntentResult;
use super::{ClassifyError, IntentClassifier};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Gemini `generateContent` client used for intent classification
pub struct GeminiClassifier {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClassifier {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    fn build_request(query: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(classification_prompt(query)),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                response_mime_type: "application/json",
                response_schema: intent_schema(),
            },
        }
    }

    /// Pull the embedded answer out of the response envelope
    fn parse_response(body: &str) -> Result<IntentResult, ClassifyError> {
        let envelope: GeminiResponse =
            serde_json::from_str(body).map_err(|_| ClassifyError::Decode)?;

        let Some(text) = envelope.first_text() else {
            tracing::warn!(body = %body, "Unexpected Gemini API response structure");
            return Err(ClassifyError::UnexpectedResponse);
        };

        serde_json::from_str(text).map_err(|e| {
            tracing::warn!(error = %e, text = %text, "Gemini answer is not an intent object");
            ClassifyError::Decode
        })
    }
}

#[async_trait]
impl IntentClassifier for GeminiClassifier {
    async fn classify(&self, query: &str) -> Result<IntentResult, ClassifyError> {
        let request = Self::build_request(query);
        tracing::info!(query = %query, "Calling Gemini API");

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json");
        if !self.api_key.is_empty() {
            builder = builder.query(&[("key", self.api_key.as_str())]);
        }

        let response = builder
            .json(&request)
            .send()
            .await
            .map_err(|e| ClassifyError::from_transport(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClassifyError::from_transport(&e))?;

        if !status.is_success() {
            return Err(ClassifyError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Self::parse_response(&body)
    }
}

fn classification_prompt(query: &str) -> String {
    format!(
        r#"Analyze the following user query and determine if it's a request for Indian Railways train status.
If it is, extract the 5-digit train number.
If no 5-digit train number is explicitly mentioned, return null for train_number.

Respond with a JSON object in the following format:
{{
    "intent": "get_train_status" | "unclear",
    "train_number": "XXXXX" | null
}}

User query: "{query}""#
    )
}

fn intent_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "intent": {
                "type": "STRING",
                "enum": ["get_train_status", "unclear"]
            },
            "train_number": {
                "type": "STRING",
                "nullable": true,
                "pattern": "^\\d{5}$"
            }
        },
        "required": ["intent"],
        "propertyOrdering": ["intent", "train_number"]
    })
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Every level is optional: a missing piece is an unexpected shape, not a
/// decode failure.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
}

impl GeminiResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
    }
}
