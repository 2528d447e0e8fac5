use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use rewrite_proxy::config::{self, ProxyConfig};
use rewrite_proxy::http::HttpServer;
use rewrite_proxy::lifecycle::{signals, Shutdown};
use rewrite_proxy::observability::logging;

#[derive(Parser)]
#[command(name = "rewrite-proxy")]
#[command(about = "Path-prefix rewriting HTTP proxy", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => ProxyConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        rules = config.rules.len(),
        landing_enabled = config.landing.enabled,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        signal_shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, shutdown.handle()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
