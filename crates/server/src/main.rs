use db::{DBService, DbErr};
use server::{AppState, config::ServerConfig, http};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Debug, Error)]
enum InventoryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Database(#[from] DbErr),
}

#[tokio::main]
async fn main() -> Result<(), InventoryError> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_string = format!(
        "warn,server={level},db={level},tower_http={level}",
        level = log_level
    );
    let env_filter = EnvFilter::try_new(filter_string).expect("Failed to create tracing filter");
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let config = ServerConfig::from_env();

    let db = DBService::connect(&config.db).await?;
    let app = http::router(AppState::new(db.clone()));

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Server running on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Drain in-flight queries before exiting.
    db.close().await?;
    tracing::info!("Store pool closed, bye");

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigint = match signal(SignalKind::interrupt()) {
            Ok(sig) => sig,
            Err(e) => {
                tracing::error!("Failed to install SIGINT handler: {e}");
                return;
            }
        };

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sig) => Some(sig),
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                None
            }
        };

        tokio::select! {
            _ = sigint.recv() => {},
            _ = async {
                if let Some(sigterm) = sigterm.as_mut() {
                    sigterm.recv().await;
                } else {
                    std::future::pending::<()>().await;
                }
            } => {},
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            return;
        }
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
