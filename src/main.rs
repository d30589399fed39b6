use ccflux_tui::{config::ProxyConfig, tui};

use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cc-flux",
    version,
    about = "Pick a model provider and push it to the local CC-Flux proxy"
)]
struct Cli {}

/// The TUI owns the terminal, so tracing goes to a daily log file instead of stdout.
/// Logging is skipped entirely if the log directory cannot be created.
fn init_logging() -> Option<WorkerGuard> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("cc-flux")
        .join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("cc-flux.log")
        .build(&log_dir)
        .ok()?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    let _guard = init_logging();

    let proxy = ProxyConfig::from_env();
    let providers = tui::providers::load();
    tracing::info!(proxy = %proxy.base_url, providers = providers.len(), "starting controller");

    let result = tui::run(providers, proxy).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "controller exited with error");
    }
    result
}
