mod bootstrap;
mod health;
pub mod products;

use std::future::IntoFuture;
use std::time::Duration;

use anyhow::Result;
use storefront_core::config::{AppConfig, LoadOptions};
use tokio::sync::watch;

fn init_logging(config: &AppConfig) {
    use storefront_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config);

    health::spawn(
        &app.config.server.bind_address,
        app.config.server.health_check_port,
        app.repository.clone(),
    )
    .await?;

    let address = app.config.server.api_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    let (stop_tx, mut stop_rx) = watch::channel(false);
    let server = axum::serve(listener, products::router(app.repository.clone()))
        .with_graceful_shutdown(async move {
            let _ = stop_rx.changed().await;
        });
    let server = tokio::spawn(server.into_future());

    tracing::info!(
        event_name = "system.server.started",
        bind_address = %address,
        "storefront-server started"
    );
    wait_for_shutdown().await?;
    tracing::info!(event_name = "system.server.stopping", "storefront-server stopping");

    let _ = stop_tx.send(true);
    let grace = Duration::from_secs(app.config.server.graceful_shutdown_secs);
    match tokio::time::timeout(grace, server).await {
        Ok(joined) => joined??,
        Err(_) => tracing::warn!(
            event_name = "system.server.shutdown_timeout",
            grace_secs = grace.as_secs(),
            "in-flight requests did not drain before the shutdown deadline"
        ),
    }

    Ok(())
}

async fn wait_for_shutdown() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}
