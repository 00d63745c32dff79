//! Rail Agent - conversational train status lookups
//!
//! Two processes share this crate: the lookup service (`rail-lookup`), which
//! answers train status queries from a fixed table, and the conversational
//! agent (`rail-agent`), which classifies free text with Gemini and calls the
//! lookup service as a tool.

pub mod agent;
pub mod api;
pub mod config;
pub mod llm;
pub mod lookup;
