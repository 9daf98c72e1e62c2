//! json-response demo server.
//!
//! Serves a handful of routes that answer through the response writer, one
//! per outcome family. Configuration is an optional TOML file; `--bind`
//! overrides its bind address.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use json_response::config::{load_config, ServerConfig};
use json_response::observability::init_logging;
use json_response::server::HttpServer;

#[derive(Parser)]
#[command(name = "json-response")]
#[command(about = "Demo server for uniform JSON responses", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overrides the config file.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("json_response=debug,tower_http=debug");

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.bind_address,
        content_type = %config.writer.content_type,
        default_headers = config.writer.default_headers.len(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.bind_address).await?;

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
