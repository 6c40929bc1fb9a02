//! Startup helpers: configuration, tracing, upstream client, listener and shutdown.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::Error, upstream::UpstreamClient};

/// Load the process configuration from the environment
pub fn load_config() -> Result<Config, Error> {
    let config = Config::from_env()?;

    Ok(config)
}

/// Initialize the global tracing subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Build the pooled client used for both upstream feeds
pub fn build_upstream_client(config: &Config) -> Result<UpstreamClient, Error> {
    let upstream = UpstreamClient::from_config(config)?;

    Ok(upstream)
}

/// Bind the HTTP listener to the configured address
pub async fn bind_listener(config: &Config) -> Result<tokio::net::TcpListener, Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Listening on {}", config.bind_addr);

    Ok(listener)
}

/// Resolves once SIGINT or SIGTERM is received
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let (Ok(mut sigterm), Ok(mut sigint)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) else {
            tracing::warn!("Failed to register shutdown signal handlers");
            return std::future::pending().await;
        };

        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    tracing::info!("Shutdown signal received");
}
