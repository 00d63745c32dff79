//! rail-agent - interactive train status assistant
//!
//! Reads queries from stdin, classifies them with Gemini and answers through
//! the lookup service. Logs go to stderr so they stay out of the conversation.

use rail_agent::agent::{Agent, HttpToolClient};
use rail_agent::config::AgentConfig;
use rail_agent::llm::{GeminiClassifier, LoggingClassifier};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rail_agent=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AgentConfig::from_env()?;
    if config.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; Gemini requests will be sent without a key");
    }

    let client = config.http_client()?;
    let classifier = LoggingClassifier::new(GeminiClassifier::new(
        client.clone(),
        config.gemini_api_url.as_str(),
        config.gemini_api_key.as_str(),
    ));
    let tools = HttpToolClient::new(client, config.lookup_url.as_str());
    let agent = Agent::new(classifier, tools);

    tracing::info!(lookup_url = %config.lookup_url, "Starting AI agent");
    let mut stdout = tokio::io::stdout();
    agent.run(BufReader::new(tokio::io::stdin()), &mut stdout).await?;

    Ok(())
}
