use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::app::app;
use crate::config::{AppConfig, StoreBackend};
use crate::database::DatabaseManager;
use crate::handlers::AppState;

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[arg(long, help = "Port to listen on (overrides BACKOFFICE_PORT)")]
    pub port: Option<u16>,

    #[arg(long, help = "Keep records in process memory instead of Postgres")]
    pub memory: bool,
}

pub async fn handle(args: ServeArgs, config: &AppConfig) -> anyhow::Result<()> {
    let backend = if args.memory { StoreBackend::Memory } else { config.database.backend };

    let (state, database) = match backend {
        StoreBackend::Memory => {
            info!("Using in-memory record store; data is lost on exit");
            (AppState::in_memory(config.pagination.clone()), None)
        }
        StoreBackend::Postgres => {
            let database = DatabaseManager::connect(&config.database)
                .await
                .context("failed to connect to database")?;
            (AppState::postgres(&database, config.pagination.clone()), Some(database))
        }
    };

    let port = args.port.unwrap_or(config.server.port);
    let bind_addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Back-office API listening on http://{}", bind_addr);

    axum::serve(listener, app(state, &config.security))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(database) = database {
        database.close().await;
    }
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
