//! Application entry point.
//!
//! Initializes tracing, resolves configuration from the environment, queries
//! the host identity, binds the listener and serves until SIGTERM/SIGINT.

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bluegreen_app::config::{AppConfig, DEFAULT_LOG_FILTER, STARTUP_LOG_TARGET};
use bluegreen_app::http::{bind, serve, shutdown_signal};
use bluegreen_app::{create_router, AppError, AppState, HostInfo};

/// Sample HTTP workload for blue/green deployments.
///
/// Listens on $PORT (default 3000) and reports $APP_VERSION (default 1.0.0).
#[derive(Parser, Debug)]
#[command(name = "bluegreen-app", version, about)]
struct Args {
    /// Log level filter (e.g., "bluegreen_app=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable
    Text,
    /// One JSON object per line
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    let started_at = Instant::now();
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    if let Err(e) = init_tracing(&log_filter, args.log_format) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(started_at).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(target: STARTUP_LOG_TARGET, error = %e, "Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str, format: LogFormat) -> Result<(), ParseError> {
    let filter =
        EnvFilter::new(filter).add_directive(format!("{STARTUP_LOG_TARGET}=info").parse()?);

    let (text, json) = match format {
        LogFormat::Text => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .init();

    Ok(())
}

async fn run(started_at: Instant) -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let host = HostInfo::detect().map_err(AppError::Hostname)?;
    tracing::debug!(hostname = %host.hostname, platform = host.platform, "Resolved host identity");

    let listener = bind(config.bind_addr()).await?;
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(config.port);

    tracing::info!(target: STARTUP_LOG_TARGET, port, "server running on port {}", port);
    tracing::info!(target: STARTUP_LOG_TARGET, version = %config.version, "version: {}", config.version);

    let app = create_router(AppState::new(config, host, started_at));
    serve(listener, app, shutdown_signal()).await?;

    Ok(())
}
