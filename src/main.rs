mod config;
mod fallback;
mod notion;
mod routes;
mod state;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::notion::NotionClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::load()?;
    init_tracing(config.json_logs());

    if config.record_query().is_err() {
        tracing::warn!(
            "SPH_NOTION_INTEGRATION_SECRET or EVENTS_DB_ID is not set; calendars will report the error"
        );
    }

    let state = AppState::new(config.clone(), NotionClient::new(&config))?;
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    tracing::info!(address = %listener.local_addr()?, "notion-calendar listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
