//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware emit tracing events
//!     → request span (request_id, method, path) from http::request
//!     → logging.rs subscriber (pretty or JSON to stdout)
//! ```
//!
//! Passwords never reach a log field; handlers log names, counts and flags.

pub mod logging;

pub use logging::init_logging;
