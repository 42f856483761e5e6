//! NebulaLens Web Server
//!
//! Run with: cargo run -p nebulalens-web

use std::net::SocketAddr;
use std::sync::Arc;
use nebulalens_config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nebulalens=info,nebulalens_web=info,tower_http=info")),
        )
        .init();

    info!("Starting NebulaLens Web Server...");

    let config = Config::load()?;
    info!(classifier = %config.classifier.base_url, history = config.history.max_entries, "Configuration loaded");

    let addr: SocketAddr = config.server.bind.parse()?;
    let state = nebulalens_web::state::AppState::new(config)?;
    let app = nebulalens_web::router::build_router(Arc::new(state));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
