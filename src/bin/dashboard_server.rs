//! Routerbench Dashboard Server
//!
//! Serves the Go vs Rust router comparison dashboard together with the
//! illustrative report API endpoints, and can export the static report
//! for offline hosting.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use routerbench_report::config::ReportConfig;
use routerbench_report::report::ReportRenderer;
use routerbench_report::server;
use routerbench_report::view::ComparisonView;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "routerbench-dashboard")]
#[command(about = "Go vs Rust API router benchmark dashboard")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Server bind address
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable development mode (more verbose logging)
    #[arg(long)]
    dev: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve,
    /// Write the static report to the output directory
    Export {
        /// Output directory (defaults to the configured one)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.dev {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    let config = match &cli.config {
        Some(path) => ReportConfig::from_file(path).context("Failed to load configuration")?,
        None => ReportConfig::default(),
    };

    match cli.command {
        Some(Commands::Serve) | None => serve_dashboard(cli.bind, config).await,
        Some(Commands::Export { output_dir }) => export_report(config, output_dir),
    }
}

async fn serve_dashboard(bind_addr: SocketAddr, config: ReportConfig) -> Result<()> {
    let app = server::router(config);

    info!("Starting benchmark dashboard server on {}", bind_addr);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .context("Failed to bind server")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn export_report(config: ReportConfig, output_dir: Option<PathBuf>) -> Result<()> {
    let dir = output_dir.unwrap_or_else(|| config.output_dir.clone());

    let mut view = ComparisonView::new(config.series_theme())?;
    let snapshot = view.snapshot()?;
    let path = ReportRenderer::new(config).write_to_dir(&snapshot, &dir)?;

    info!("Static report exported to {}", path.display());
    Ok(())
}
