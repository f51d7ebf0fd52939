// Albums API - Main HTTP Server
// Run with: cargo run --bin server

//! # Albums API Server Binary
//!
//! Starts the HTTP server over the seeded in-memory catalogue.
//!
//! ## What This Server Provides
//!
//! - **Album CRUD**: list, get, create, replace and delete albums
//! - **Fan-out demo**: `GET /handlerWithGorutine` joins two simulated calls
//! - **Health check**: `GET /health`
//! - **CORS Support**: Allows browser-based clients to connect
//!
//! ## Configuration
//!
//! Every flag can also come from the environment (or a `.env` file):
//!
//! | flag                | env               | default     |
//! |---------------------|-------------------|-------------|
//! | `--host`            | `SERVER_HOST`     | `localhost` |
//! | `--port`            | `SERVER_PORT`     | `8080`      |
//! | `--no-cors`         |                   | CORS on     |
//! | `--demo-latency-ms` | `DEMO_LATENCY_MS` | `2000`      |
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use albums_api::AlbumsApiServerBuilder;
use clap::Parser;
use dotenv::dotenv;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "albums-api-server")]
#[command(about = "Albums API - in-memory album catalogue over HTTP")]
#[command(version)]
struct Cli {
    /// Host to bind
    #[arg(long, env = "SERVER_HOST", default_value = "localhost")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "SERVER_PORT", default_value_t = 8080)]
    port: u16,

    /// Disable the permissive CORS layer
    #[arg(long)]
    no_cors: bool,

    /// Latency of each simulated downstream call, in milliseconds
    #[arg(long, env = "DEMO_LATENCY_MS", default_value_t = 2000)]
    demo_latency_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables from .env file
    if let Err(e) = dotenv() {
        // Only warn if .env file is missing - it's optional
        eprintln!("Warning: Could not load .env file: {}", e);
    }

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚀 Starting Albums API Server...");
    info!("=====================================");
    info!("Server: {}:{}", cli.host, cli.port);

    AlbumsApiServerBuilder::new()
        .with_host(cli.host)
        .with_port(cli.port)
        .with_cors(!cli.no_cors)
        .with_demo_latency(Duration::from_millis(cli.demo_latency_ms))
        .build()
        .run()
        .await?;

    Ok(())
}
