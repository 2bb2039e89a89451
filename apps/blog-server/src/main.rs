//! # Blog Server
//!
//! The main entry point for the Actix-web HTTP server.

use anyhow::Context;

use blog_server::AppConfig;
use blog_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting blog server on {}:{}",
        config.host,
        config.port
    );

    let server = blog_server::start(&config)
        .await
        .context("failed to start server")?;

    server.wait().await.context("server exited with an error")?;

    Ok(())
}
