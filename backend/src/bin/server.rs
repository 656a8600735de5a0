//! Astro-Convert HTTP Server Binary
//!
//! This is the main entry point for the Astro-Convert REST API server.
//! It loads configuration, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin astro-convert-server
//!
//! # Explicit configuration file and port
//! ASTRO_CONVERT_CONFIG=/etc/astro-convert.toml PORT=9000 \
//!   cargo run --bin astro-convert-server
//! ```
//!
//! # Environment Variables
//!
//! - `ASTRO_CONVERT_CONFIG`: Path to a TOML configuration file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use astro_convert::config::AppConfig;
use astro_convert::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Astro-Convert HTTP Server");

    let config = AppConfig::from_env_or_default()?;
    let cosmology = config.cosmology;
    info!(
        "Cosmology: H0={} Om={} Tcmb={} Neff={} (OL={:.6})",
        cosmology.h0,
        cosmology.omega_m,
        cosmology.t_cmb,
        cosmology.n_eff,
        cosmology.omega_lambda()
    );

    let addr: SocketAddr = config.server.bind_address().parse()?;

    // Create application state and router with all endpoints
    let app = create_router(AppState::new(config));

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
