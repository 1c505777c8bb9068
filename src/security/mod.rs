//! Security subsystem.
//!
//! # Components
//! - `headers.rs`: hardening response headers
//! - `limits.rs`: request body size cap
//!
//! Both are applied as tower layers around the whole router.

pub mod headers;
pub mod limits;

pub use headers::with_security_headers;
pub use limits::with_body_limit;
