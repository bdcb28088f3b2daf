//! # wifiqr-server
//!
//! HTTP server for the wifiqr WiFi QR code generator.
//!
//! This binary provides:
//! - REST API for WiFi QR generation and export (SVG, PNG, printable HTML)
//! - OpenAPI documentation via Swagger UI at `/docs`
//! - Structured logging to file and stdout
//!
//! ## Running
//!
//! ```bash
//! # Development
//! cargo run --package wifiqr-server
//!
//! # Production
//! WIFIQR_ENV=production ./wifiqr-server
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

mod api;
mod config;
mod logging;
mod state;

use config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let is_production = std::env::var("WIFIQR_ENV").is_ok_and(|v| v == "production");
    logging::init(is_production)?;

    info!("Starting wifiqr-server");

    let server_config = ServerConfig::load_or_default()?;
    let port = server_config.port;
    let state = AppState::shared(server_config);

    let app = api::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
