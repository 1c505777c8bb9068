//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Check script names and the location list are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PortalConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::PortalConfig;
use crate::forms::validation::{MAX_USER_COUNT, MIN_USER_COUNT};

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("timeouts.request_secs must be greater than 0")]
    ZeroTimeout,

    #[error("security.max_body_size must be greater than 0")]
    ZeroBodyLimit,

    #[error("scripts.{field} '{value}' must be non-empty without quotes or whitespace")]
    ScriptName { field: &'static str, value: String },

    #[error("form.default_user_count {0} is outside 1..=1000")]
    DefaultUserCount(u32),

    #[error("form.locations must not be empty")]
    NoLocations,

    #[error("form.locations contains '{0}' more than once")]
    DuplicateLocation(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &PortalConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    for (field, value) in [
        ("create_script", &config.scripts.create_script),
        ("remove_script", &config.scripts.remove_script),
    ] {
        if !is_usable_script_name(value) {
            errors.push(ValidationError::ScriptName {
                field,
                value: value.clone(),
            });
        }
    }

    let count = i64::from(config.form.default_user_count);
    if !(MIN_USER_COUNT..=MAX_USER_COUNT).contains(&count) {
        errors.push(ValidationError::DefaultUserCount(config.form.default_user_count));
    }

    if config.form.locations.is_empty() {
        errors.push(ValidationError::NoLocations);
    }

    let mut seen = HashSet::new();
    for location in &config.form.locations {
        if !seen.insert(location.as_str()) {
            errors.push(ValidationError::DuplicateLocation(location.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_usable_script_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '"' || c == '`')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&PortalConfig::default()), Ok(()));
    }

    #[test]
    fn bad_bind_address() {
        let mut config = PortalConfig::default();
        config.listener.bind_address = "localhost".into();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::BindAddress("localhost".into())])
        );
    }

    #[test]
    fn script_names_with_spaces_are_rejected() {
        let mut config = PortalConfig::default();
        config.scripts.remove_script = "Remove Users.ps1".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::ScriptName { field: "remove_script", .. }]
        ));
    }

    #[test]
    fn default_user_count_must_be_in_range() {
        let mut config = PortalConfig::default();
        config.form.default_user_count = 5000;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::DefaultUserCount(5000)])
        );
    }

    #[test]
    fn duplicate_locations_are_reported() {
        let mut config = PortalConfig::default();
        config.form.locations = vec!["East US".into(), "West US".into(), "East US".into()];
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::DuplicateLocation("East US".into())])
        );
    }

    #[test]
    fn collects_every_error() {
        let mut config = PortalConfig::default();
        config.timeouts.request_secs = 0;
        config.security.max_body_size = 0;
        config.scripts.create_script = String::new();
        assert_eq!(validate_config(&config).unwrap_err().len(), 3);
    }
}
