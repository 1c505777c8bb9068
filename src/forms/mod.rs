//! Form intake subsystem.
//!
//! # Data Flow
//! ```text
//! urlencoded body
//!     → CreateForm / RemoveForm (raw, all fields optional strings)
//!     → validation.rs (per-field checks, errors collected)
//!     → CreateUsers / RemoveUsers (typed, known-valid)
//! ```
//!
//! Checkboxes arrive as the literal string `"true"`; anything else, or a
//! missing field, is false. When a field is repeated, the first value wins.

pub mod create;
pub mod remove;
pub mod validation;

pub use create::{CreateForm, CreateUsers};
pub use remove::{RemoveForm, RemoveUsers};
pub use validation::FieldError;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Which script a generated command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Remove,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Remove => "remove",
        }
    }
}

/// Build a form from decoded `key=value` pairs, keeping the first value of
/// each repeated key.
pub fn from_pairs<T: DeserializeOwned + Default>(pairs: Vec<(String, String)>) -> T {
    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(Value::String(value));
    }
    serde_json::from_value(Value::Object(fields)).unwrap_or_default()
}

/// Trimmed text of an optional field, empty when absent.
pub(crate) fn text(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

/// Trimmed text of an optional field, `None` when absent or blank.
pub(crate) fn non_empty(value: &Option<String>) -> Option<String> {
    let value = text(value);
    (!value.is_empty()).then(|| value.to_string())
}

/// Checkbox semantics.
pub(crate) fn flag(value: &Option<String>) -> bool {
    value.as_deref() == Some("true")
}
