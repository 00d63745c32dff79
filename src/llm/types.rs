//! Classification result types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What the user is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent {
    GetTrainStatus,
    /// Anything else, including labels the model should not have produced
    #[default]
    Unclear,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::GetTrainStatus => "get_train_status",
            Intent::Unclear => "unclear",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "get_train_status" => Intent::GetTrainStatus,
            _ => Intent::Unclear,
        }
    }
}

impl Serialize for Intent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Classified query: `{"intent": ..., "train_number": "12301" | null}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct IntentResult {
    pub intent: Intent,
    pub train_number: Option<String>,
}

impl IntentResult {
    pub fn train_status(train_number: impl Into<String>) -> Self {
        Self {
            intent: Intent::GetTrainStatus,
            train_number: Some(train_number.into()),
        }
    }

    pub fn train_status_without_number() -> Self {
        Self {
            intent: Intent::GetTrainStatus,
            train_number: None,
        }
    }

    pub fn unclear() -> Self {
        Self::default()
    }
}

/// Normalize the model's answer object. The model is schema-constrained, but
/// a missing intent or a numeric train number should not fail the whole turn.
/// Only objects are accepted; arrays and scalars fail to decode.
impl From<Map<String, Value>> for IntentResult {
    fn from(mut raw: Map<String, Value>) -> Self {
        let intent = match raw.get("intent") {
            Some(Value::String(label)) => Intent::from_label(label),
            _ => Intent::Unclear,
        };
        let train_number = match raw.remove("train_number") {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
        .filter(|s| !s.is_empty());

        Self {
            intent,
            train_number,
        }
    }
}
