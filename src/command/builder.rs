//! Incremental builder for a single PowerShell invocation.

use std::fmt::Display;

/// Wrap a value in a PowerShell verbatim string.
///
/// An embedded `'` is written as `''`, so the argument cannot end early.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// A command line under construction.
#[derive(Debug, Clone)]
pub struct CommandLine {
    buf: String,
}

impl CommandLine {
    /// Start a command that runs `script` from the current directory.
    pub fn script(script: &str) -> Self {
        Self {
            buf: format!(".\\{script}"),
        }
    }

    /// `-Name 'value'`
    pub fn quoted(&mut self, name: &str, value: &str) -> &mut Self {
        self.param(name, quote(value))
    }

    /// `-Name value`, written as-is.
    pub fn param(&mut self, name: &str, value: impl Display) -> &mut Self {
        self.buf.push_str(&format!(" -{name} {value}"));
        self
    }

    /// `-Name $true` / `-Name $false`
    pub fn boolean(&mut self, name: &str, value: bool) -> &mut Self {
        self.param(name, if value { "$true" } else { "$false" })
    }

    /// Bare `-Name`.
    pub fn switch(&mut self, name: &str) -> &mut Self {
        self.buf.push_str(&format!(" -{name}"));
        self
    }

    pub fn finish(&self) -> String {
        self.buf.clone()
    }
}
