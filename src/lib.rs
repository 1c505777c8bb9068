//! Conference user management portal.
//!
//! Validates create/remove form submissions and renders the matching
//! PowerShell command line. Nothing is executed or stored.

pub mod command;
pub mod config;
pub mod forms;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod views;

pub use config::schema::PortalConfig;
pub use http::PortalServer;
pub use lifecycle::Shutdown;
