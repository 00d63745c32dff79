//! Conversational agent
//!
//! One user turn is: classify the text, then either call the
//! `get_train_status` tool or explain what the agent can do. Every failure
//! becomes a printed reply; nothing short of an I/O error on the terminal
//! ends the session.

mod repl;
#[cfg(test)]
mod testing;
mod tool_client;

pub use tool_client::{HttpToolClient, ToolCallError, ToolClient};

use crate::llm::{Intent, IntentClassifier};
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub const MISSING_NUMBER_REPLY: &str = "I understand you want train status, but I couldn't find a 5-digit train number in your query. Please provide it (e.g., '12301').";

pub const UNSUPPORTED_REPLY: &str = "I can currently only help with Indian Railways train status queries. Please ask about a train's status.";

/// Intent classifier plus tool client
pub struct Agent<C, T> {
    classifier: C,
    tools: T,
}

impl<C: IntentClassifier, T: ToolClient> Agent<C, T> {
    pub fn new(classifier: C, tools: T) -> Self {
        Self { classifier, tools }
    }

    /// Handle one query, writing `Agent: ...` lines to `out` as they become
    /// available.
    ///
    /// # Errors
    /// Only write failures on `out` are returned.
    pub async fn respond<W>(&self, query: &str, out: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let classified = match self.classifier.classify(query).await {
            Ok(classified) => classified,
            Err(e) => {
                return say(
                    out,
                    &format!("I'm having trouble understanding right now: {e}"),
                )
                .await;
            }
        };

        match (classified.intent, classified.train_number) {
            (Intent::GetTrainStatus, Some(train_number)) => {
                say(
                    out,
                    &format!("Looking up status for train number {train_number}..."),
                )
                .await?;

                let reply = match self.tools.get_train_status(&train_number).await {
                    Ok(record) => format!(
                        "The status for train {} ({}) is: {}",
                        record.train_number, record.name, record.status
                    ),
                    Err(e) => format!("Sorry, I encountered an issue: {e}"),
                };
                say(out, &reply).await
            }
            (Intent::GetTrainStatus, None) => say(out, MISSING_NUMBER_REPLY).await,
            (Intent::Unclear, _) => say(out, UNSUPPORTED_REPLY).await,
        }
    }
}

async fn say<W: AsyncWrite + Unpin>(out: &mut W, message: &str) -> std::io::Result<()> {
    out.write_all(format!("Agent: {message}\n").as_bytes()).await?;
    out.flush().await
}
