//! Mock implementations for testing
//!
//! The classifier boundary is non-deterministic in production, so tests pin
//! it with fixed query → answer pairs.

use super::{ToolCallError, ToolClient};
use crate::api::ErrorResponse;
use crate::llm::{ClassifyError, IntentClassifier, IntentResult};
use crate::lookup::{LookupTable, TrainRecord};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

// ============================================================================
// Mock Classifier
// ============================================================================

/// Classifier with canned answers per exact query
pub struct MockClassifier {
    answers: HashMap<String, Result<IntentResult, ClassifyError>>,
    /// Record of all queries classified
    pub queries: Mutex<Vec<String>>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn answer(mut self, query: impl Into<String>, result: IntentResult) -> Self {
        self.answers.insert(query.into(), Ok(result));
        self
    }

    pub fn fail(mut self, query: impl Into<String>, error: ClassifyError) -> Self {
        self.answers.insert(query.into(), Err(error));
        self
    }

    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl IntentClassifier for MockClassifier {
    async fn classify(&self, query: &str) -> Result<IntentResult, ClassifyError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.answers
            .get(query)
            .cloned()
            .unwrap_or_else(|| Err(ClassifyError::Other(format!("no canned answer for {query:?}"))))
    }
}

// ============================================================================
// Mock Tool Client
// ============================================================================

/// Tool client answering `get_train_status` from an in-memory table, with the
/// same 404 body the real service produces
pub struct MockToolClient {
    table: LookupTable,
    /// Train numbers requested, in order
    pub calls: Mutex<Vec<String>>,
}

impl MockToolClient {
    pub fn new() -> Self {
        Self {
            table: LookupTable::from_records([]),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_record(mut self, record: TrainRecord) -> Self {
        let mut records: Vec<TrainRecord> = self.table.records().cloned().collect();
        records.push(record);
        self.table = LookupTable::from_records(records);
        self
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ToolClient for MockToolClient {
    async fn call_tool(&self, name: &str, payload: Value) -> Result<Value, ToolCallError> {
        let train_number = payload["train_number"].as_str().unwrap_or_default().to_string();
        self.calls.lock().unwrap().push(train_number.clone());

        if name != crate::lookup::GET_TRAIN_STATUS {
            return Err(ToolCallError::Http {
                status: 404,
                body: "Not Found".to_string(),
            });
        }

        match self.table.get(&train_number) {
            Some(record) => Ok(serde_json::to_value(record).unwrap()),
            None => Err(ToolCallError::Http {
                status: 404,
                body: serde_json::to_string(&ErrorResponse::new(format!(
                    "Train number '{train_number}' not found or no status available in our database."
                )))
                .unwrap(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_classifier() {
        let mock = MockClassifier::new().answer("hi", IntentResult::unclear());
        assert_eq!(mock.classify("hi").await.unwrap(), IntentResult::unclear());
        assert!(mock.classify("other").await.is_err());
        assert_eq!(mock.recorded_queries(), vec!["hi", "other"]);
    }

    #[tokio::test]
    async fn test_mock_tool_client() {
        let mock = MockToolClient::new().with_record(TrainRecord::new("12137", "Punjab Mail", "On time"));
        let record = mock.get_train_status("12137").await.unwrap();
        assert_eq!(record.name, "Punjab Mail");

        let err = mock.get_train_status("00000").await.unwrap_err();
        assert!(matches!(err, ToolCallError::Http { status: 404, .. }));
        assert_eq!(mock.recorded_calls(), vec!["12137", "00000"]);
    }
}
