//! HTTP request handlers

use super::types::{ErrorResponse, VersionResponse};
use super::AppState;
use crate::lookup::TrainRecord;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

pub const HOME_MESSAGE: &str =
    "MCP Server is running. Access /tool/get_train_status to use the train status tool.";

pub const MISSING_TRAIN_NUMBER: &str = "Invalid request. 'train_number' is required.";

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(home))
        // Tools
        .route("/tool/get_train_status", post(get_train_status))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

async fn home() -> &'static str {
    tracing::info!("Root endpoint accessed");
    HOME_MESSAGE
}

async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================
// Train Status Tool
// ============================================================

/// The body is taken raw so malformed JSON and a missing `Content-Type`
/// both land on the same 400 response.
async fn get_train_status(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TrainRecord>, AppError> {
    tracing::info!("Received request for get_train_status tool");

    let Some(train_number) = extract_train_number(&body) else {
        tracing::warn!("Invalid request: 'train_number' missing in payload");
        return Err(AppError::BadRequest(MISSING_TRAIN_NUMBER.to_string()));
    };

    if let Some(record) = state.table.get(&train_number) {
        tracing::info!(
            train_number = %record.train_number,
            status = %record.status,
            "Found train status"
        );
        Ok(Json(record.clone()))
    } else {
        tracing::info!(train_number = %train_number, "No status found for train");
        Err(AppError::NotFound(format!(
            "Train number '{train_number}' not found or no status available in our database."
        )))
    }
}

/// Pull `train_number` out of a non-empty JSON object body, coerced to a
/// trimmed string. Any present value counts, `null` included, which renders
/// as `None`; booleans render as `True`/`False`.
fn extract_train_number(body: &[u8]) -> Option<String> {
    let payload: Value = serde_json::from_slice(body).ok()?;
    let raw = match payload.as_object()?.get("train_number")? {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(raw.trim().to_string())
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
