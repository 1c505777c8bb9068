//! Request limits.
//!
//! Bodies larger than `security.max_body_size` are rejected with
//! 413 Payload Too Large before any form parsing happens.

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::config::SecurityConfig;

pub fn with_body_limit(router: Router, config: &SecurityConfig) -> Router {
    router.layer(RequestBodyLimitLayer::new(config.max_body_size))
}
