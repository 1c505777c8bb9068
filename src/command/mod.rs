//! Command line generation for the downstream PowerShell scripts.
//!
//! Commands are only rendered, never executed. Clauses are appended in a
//! fixed order so the same options always yield the same string.

pub mod builder;
pub mod scripts;

pub use builder::{quote, CommandLine};
pub use scripts::{create_command, remove_command};
