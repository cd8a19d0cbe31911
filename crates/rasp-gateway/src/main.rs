use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use rasp_cache::{CacheStore, RefreshJob};
use rasp_gateway::app::{self, AppState};
use rasp_scraper::PageFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rasp_gateway=info,tower_http=debug".into()),
        )
        .init();

    // load config: explicit path via RASP_CONFIG > ~/.rasp/rasp.toml
    let config_path = std::env::var("RASP_CONFIG").ok();
    let config = rasp_core::config::RaspConfig::load(config_path.as_deref()).unwrap_or_else(|e| {
        warn!("Config load failed ({}), using defaults", e);
        rasp_core::config::RaspConfig::default()
    });

    let bind = config.gateway.bind.clone();
    let port = config.gateway.port;

    let fetcher = PageFetcher::new(&config.source)?;
    let store = Arc::new(CacheStore::new());

    // roster refresh: once immediately at startup, then on the configured
    // interval. An unreachable upstream logs a warning and the process keeps
    // serving whatever it has.
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let job = RefreshJob::new(
        Arc::clone(&store),
        fetcher.clone(),
        Duration::from_secs(config.refresh.interval_secs),
    );
    tokio::spawn(async move { job.run(shutdown_rx).await });

    let state = Arc::new(AppState::new(config, store, fetcher));
    let router = app::build_router(state);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("rasp gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    // signal the refresh job to stop
    let _ = shutdown_tx.send(true);
    Ok(())
}
