//! rail-lookup - simulated train status tool service
//!
//! Serves `POST /tool/get_train_status` from a fixed in-memory table.

use rail_agent::api::{create_router, AppState};
use rail_agent::config::ServerConfig;
use rail_agent::lookup::LookupTable;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rail_agent=info,rail_lookup=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = ServerConfig::from_env()?;

    let table = LookupTable::seeded();
    tracing::info!(trains = table.len(), "Loaded train status table");

    let app = create_router(AppState::new(table)).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!("Lookup service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
