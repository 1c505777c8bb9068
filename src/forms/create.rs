//! Create-users form.

use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::forms::validation::{
    check_conference_name, check_domain, check_location, check_subscription_id, parse_user_count,
};
use crate::forms::{flag, non_empty, text, FieldError};

/// Raw create-users submission, exactly as posted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateForm {
    pub conference_name: Option<String>,
    pub user_count: Option<String>,
    pub domain: Option<String>,
    pub password: Option<String>,
    pub force_password_change: Option<String>,
    pub create_resource_groups: Option<String>,
    pub subscription_id: Option<String>,
    pub location: Option<String>,
    pub dry_run: Option<String>,
    pub excel_output_path: Option<String>,
}

/// A validated request to create conference users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUsers {
    pub conference_name: String,
    pub user_count: u32,
    pub domain: Option<String>,
    pub password: Option<String>,
    pub force_password_change: bool,
    pub create_resource_groups: bool,
    pub subscription_id: Option<String>,
    pub location: Option<String>,
    pub dry_run: bool,
    pub excel_output_path: Option<String>,
}

impl CreateForm {
    /// Validate every field, returning all messages on failure.
    ///
    /// A missing `user_count` falls back to the configured default; a
    /// submitted but blank one is an error.
    pub fn validate(&self, form: &FormConfig) -> Result<CreateUsers, Vec<FieldError>> {
        let mut errors = Vec::new();

        let conference_name = text(&self.conference_name);
        if let Err(e) = check_conference_name(conference_name) {
            errors.push(e);
        }

        let user_count = match &self.user_count {
            Some(raw) => parse_user_count(raw),
            None => Ok(form.default_user_count),
        };
        let user_count = user_count.unwrap_or_else(|e| {
            errors.push(e);
            0
        });

        let domain = text(&self.domain);
        if let Err(e) = check_domain(domain) {
            errors.push(e);
        }

        let subscription_id = text(&self.subscription_id);
        if let Err(e) = check_subscription_id(subscription_id) {
            errors.push(e);
        }

        let location = text(&self.location);
        if let Err(e) = check_location(location, &form.locations) {
            errors.push(e);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateUsers {
            conference_name: conference_name.to_string(),
            user_count,
            domain: non_empty(&self.domain),
            password: non_empty(&self.password),
            force_password_change: flag(&self.force_password_change),
            create_resource_groups: flag(&self.create_resource_groups),
            subscription_id: non_empty(&self.subscription_id),
            location: non_empty(&self.location),
            dry_run: flag(&self.dry_run),
            excel_output_path: non_empty(&self.excel_output_path),
        })
    }
}
