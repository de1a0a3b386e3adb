//! netviz_server - HTTP graph service
//!
//! Reads config from env vars (see `netviz::config`):
//!   NETVIZ_BIND_ADDR - listen address (default: 0.0.0.0:8000)
//!   NETVIZ_SEED      - fixed generation seed (default: entropy)

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use netviz::api::{create_router, AppState};
use netviz::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "netviz=info,netviz_server=info,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let bind_addr = config.bind_addr.clone();
    if let Some(seed) = config.seed {
        info!(seed, "graph generation uses a fixed seed");
    }

    let state = AppState::new(config).context("failed to load visualization template")?;
    let app = create_router(state);

    info!("Starting server on {}", bind_addr);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
