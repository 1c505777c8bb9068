//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, limits, headers)
//! - Serve on a bound listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::PortalConfig;
use crate::http::request::{make_request_span, PortalRequestId, X_REQUEST_ID};
use crate::http::{api, handlers};
use crate::security::{with_body_limit, with_security_headers};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PortalConfig>,
}

/// HTTP server for the conference portal.
pub struct PortalServer {
    router: Router,
    config: Arc<PortalConfig>,
}

impl PortalServer {
    /// Create a new HTTP server with the given (already validated) configuration.
    pub fn new(config: PortalConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &PortalConfig, state: AppState) -> Router {
        let router = Router::new()
            .route("/", get(handlers::index))
            .route(
                "/create",
                get(handlers::create_page).post(handlers::create_submit),
            )
            .route(
                "/remove",
                get(handlers::remove_page).post(handlers::remove_submit),
            )
            .route("/about", get(handlers::about))
            .route("/health", get(api::health))
            .route("/api/create", post(api::create))
            .route("/api/remove", post(api::remove))
            .fallback(handlers::not_found)
            .with_state(state);

        let router = with_body_limit(router, &config.security);
        let router = with_security_headers(router, &config.security);

        router
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, PortalRequestId))
    }

    /// The router, for serving or driving directly in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            locations = self.config.form.locations.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
