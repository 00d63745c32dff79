//! HTTP API for the train status lookup service
//!
//! `GET /` liveness, `POST /tool/get_train_status` lookup, `GET /version`.

mod handlers;
mod types;

pub use handlers::{create_router, HOME_MESSAGE, MISSING_TRAIN_NUMBER};
pub use types::*;

use crate::lookup::LookupTable;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<LookupTable>,
}

impl AppState {
    pub fn new(table: LookupTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}
