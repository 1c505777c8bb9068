//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned, request span opened)
//!     → handlers.rs (HTML pages) / api.rs (JSON)
//!     → forms → command → views
//!     → response.rs (status + HTML body)
//!     → Send to client
//! ```

pub mod api;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{PortalRequestId, X_REQUEST_ID};
pub use server::{AppState, PortalServer};
