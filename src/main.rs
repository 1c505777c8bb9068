//! Conference Portal
//!
//! A small web frontend that turns create/remove form submissions into
//! PowerShell command lines for the conference user scripts.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser ──▶ http (axum router + middleware)
//!                   │
//!                   ├─▶ forms (parse + validate, errors collected)
//!                   │
//!                   ├─▶ command (fixed-order clause builder)
//!                   │
//!                   └─▶ views (HTML pages, flash messages)
//!
//!     Cross-cutting: config (TOML) · observability (tracing)
//!                    security (headers, body limit) · lifecycle (signals)
//! ```

use std::path::PathBuf;

use clap::Parser;

use conference_portal::config::{load_config, validate_config, ConfigError, PortalConfig};
use conference_portal::lifecycle::start;
use conference_portal::observability::init_logging;

#[derive(Parser)]
#[command(name = "conference-portal")]
#[command(about = "Web frontend that generates conference user management commands", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "CONFERENCE_PORTAL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<PortalConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PortalConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?cli.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "conference-portal starting"
    );

    start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
