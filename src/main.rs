//! Activity export service entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use activity_export::api::{create_router, AppState};
use activity_export::config::Config;
use activity_export::metrics;
use activity_export::upstream::ActivityClient;

/// Activity export HTTP service.
#[derive(Parser, Debug)]
#[command(name = "activity-export")]
#[command(about = "Aggregates random activity suggestions into JSON/CSV exports")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Perform one upstream call and print the decoded record.
    CheckUpstream,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("activity_export=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::CheckUpstream) => cmd_check_upstream().await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Load and validate configuration.
fn load_config(port_override: Option<u16>) -> anyhow::Result<Config> {
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    Ok(config)
}

/// Run the HTTP server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    let config = load_config(port_override)?;

    info!("Configuration loaded successfully");
    info!("Upstream endpoint: {}", config.upstream_url);

    if config.metrics_enabled {
        let metrics_addr = SocketAddr::from(([0, 0, 0, 0], config.metrics_port));
        metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(metrics_addr)
            .install()?;
        info!("Prometheus exporter listening on {}", metrics_addr);
    }

    let state = AppState::new(&config);
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    let config = load_config(None)?;

    println!("Configuration OK");
    println!("  Port:           {}", config.port);
    println!("  Upstream URL:   {}", config.upstream_url);
    println!("  HTTP timeout:   {}ms", config.http_timeout_ms);
    println!("  Export dir:     {}", config.export_dir().display());
    println!("  Metrics:        {}", if config.metrics_enabled { "enabled" } else { "disabled" });

    Ok(())
}

/// Perform one upstream call and print the decoded record.
async fn cmd_check_upstream() -> anyhow::Result<()> {
    let config = load_config(None)?;
    let client = ActivityClient::new(&config);

    println!("Fetching one activity from {} ...", config.upstream_url);
    let activity = client.fetch_activity().await?;
    println!("{}", serde_json::to_string_pretty(&activity)?);

    Ok(())
}

/// Resolve on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received");
}
