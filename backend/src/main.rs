use std::net::SocketAddr;

use anyhow::Context;
use homeservices_backend::{config::EngineConfig, create_router, initialize_backend};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; `log` records from the domain layer are captured too
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Loading engine configuration");
    let config = EngineConfig::from_env()?;

    let app_state = initialize_backend(&config);
    let app = create_router(app_state, &config.server)?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| format!("Invalid server address {}:{}", config.server.host, config.server.port))?;

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
