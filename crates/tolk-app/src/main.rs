use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tolk_config::{Config, Provider};

pub mod backend;
pub mod browser;
pub mod controller;
pub mod events;
pub mod state;
pub mod ui;

use self::controller::AppController;
use self::state::AppState;

/// Local browser front-end for a machine-translation model.
#[derive(Parser, Debug)]
#[command(name = "tolk", about = "Local translation front-end")]
struct Cli {
    /// JSON config file; environment defaults are used without one
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Listen host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Do not open the page in a browser
    #[arg(long)]
    no_browser: bool,

    /// Translation provider: m2m100 or echo
    #[arg(long)]
    provider: Option<Provider>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::new().context("invalid environment configuration")?,
    };

    if let Some(host) = &cli.host {
        config.network.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.network.port = port;
    }
    if cli.no_browser {
        config.network.open_browser = false;
    }
    if let Some(provider) = cli.provider {
        config.translator.provider = provider;
    }

    Ok(config)
}

fn init_tracing(config: &Config, verbose: bool) {
    let default_filter = if verbose {
        "debug"
    } else if config.quiet {
        "warn,tolk=info"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

/// Browsers cannot open 0.0.0.0, point them at loopback instead
fn page_url(addr: SocketAddr) -> String {
    let ip = if addr.ip().is_unspecified() {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    } else {
        addr.ip()
    };
    format!("http://{}/", SocketAddr::new(ip, addr.port()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config, cli.verbose);

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }
    config.validate().context("invalid configuration")?;

    let listen_addr = config.network.listen_addr();
    let open_browser = config.network.open_browser;

    let state = Arc::new(AppState::new(config)?);
    let provider = state.gateway.metadata();
    tracing::info!(
        "Translator: {}{}",
        provider.name,
        provider
            .model
            .map(|m| format!(" ({m})"))
            .unwrap_or_default()
    );

    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    let url = page_url(listener.local_addr()?);

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(listener);
    tracing::info!("Running on {}", url);

    if open_browser {
        browser::open_page(&url);
    }

    tokio::select! {
        result = signal::ctrl_c() => {
            match result {
                Ok(()) => tracing::info!("Shutdown requested"),
                Err(e) => tracing::error!("failed to listen for ctrl+c: {e}"),
            }
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task failed during shutdown: {e:#}"),
            Err(e) => tracing::error!("task panicked during shutdown: {e}"),
        }
    }

    Ok(())
}
