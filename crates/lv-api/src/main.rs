//! LogView API — operator-facing log retrieval server.
//!
//! Serves `GET /logs` (the retrieval pipeline behind query parameters)
//! and `GET /health`.

mod config;
mod routes;
mod state;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::ApiConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "lv-api starting");

    let config = ApiConfig::from_env();
    let state = AppState::with_log_dir(&config.log_dir);

    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
