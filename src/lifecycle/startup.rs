//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener from the validated configuration
//! - Install signal handling
//! - Serve until shutdown
//!
//! Any startup error is fatal.

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::PortalConfig;
use crate::http::PortalServer;
use crate::lifecycle::Shutdown;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind, serve, and return once a shutdown signal has been handled.
pub async fn start(config: PortalConfig) -> Result<(), StartupError> {
    let address = config.listener.bind_address.clone();
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(source) => return Err(StartupError::Bind { address, source }),
    };

    let local_addr = listener.local_addr()?;
    tracing::info!(
        address = %local_addr,
        create_script = %config.scripts.create_script,
        remove_script = %config.scripts.remove_script,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let _signal_task = shutdown.trigger_on_signal();

    PortalServer::new(config).run(listener, server_shutdown).await?;
    Ok(())
}
