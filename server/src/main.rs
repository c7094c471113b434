//! QBV server binary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `.env`, initializes tracing, reads [`config::ServerConfig`], and
//! serves the Leptos SSR app over Axum. The onboarding flow keeps no server
//! state, so there is nothing else to wire up here.

#![recursion_limit = "256"]

mod config;
mod routes;

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            return ExitCode::FAILURE;
        }
    };

    let app = match routes::leptos_app(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build application router");
            return ExitCode::FAILURE;
        }
    };

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    let base = if config.base_path.is_empty() { "/" } else { config.base_path.as_str() };
    tracing::info!(%addr, base_path = base, "qbv server listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
