//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PortalConfig (validated, immutable)
//!     → shared via Arc to all handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs (or none at all)
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::FormConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::PortalConfig;
pub use schema::ScriptConfig;
pub use schema::SecurityConfig;
pub use schema::TimeoutConfig;
pub use validation::{validate_config, ValidationError};
