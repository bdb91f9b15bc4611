//! Status server - HTTP status and health endpoints for the DevOps pipeline demo.

use anyhow::Result;
use clap::Parser;
use status_server::{config, logging, routes};
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use config::Config;
use logging::{LogConfig, LogFormat};

/// Status server - pipeline status and health endpoints.
#[derive(Parser, Debug)]
#[command(name = "status-server")]
#[command(about = "HTTP status and health endpoints for the DevOps pipeline demo")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override port from config
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging (INFO level for all targets)
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging (DEBUG level, includes request traces)
    #[arg(short, long)]
    debug: bool,

    /// Quiet mode (WARN and ERROR only)
    #[arg(short, long)]
    quiet: bool,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_config = LogConfig::from_cli(cli.verbose, cli.debug, cli.quiet, cli.log_format);
    logging::init(&log_config);

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Apply CLI overrides
    if let Some(port) = cli.port {
        config.port = port;
    }

    tracing::info!(target: "status::startup", "Loaded configuration (port: {})", config.port);

    // Build router
    let app = routes::router()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(target: "status::startup", "Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
