//! Remove-users form.

use serde::{Deserialize, Serialize};

use crate::forms::validation::{check_conference_name, check_domain};
use crate::forms::{flag, non_empty, text, FieldError};

/// Raw remove-users submission.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RemoveForm {
    pub conference_name: Option<String>,
    pub domain: Option<String>,
    pub remove_groups: Option<String>,
    pub remove_resource_groups: Option<String>,
    pub force: Option<String>,
    pub dry_run: Option<String>,
}

/// A validated request to remove conference users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveUsers {
    pub conference_name: String,
    pub domain: Option<String>,
    pub remove_groups: bool,
    pub remove_resource_groups: bool,
    pub force: bool,
    pub dry_run: bool,
}

impl RemoveForm {
    pub fn validate(&self) -> Result<RemoveUsers, Vec<FieldError>> {
        let conference_name = text(&self.conference_name);

        let errors: Vec<FieldError> = [
            check_conference_name(conference_name),
            check_domain(text(&self.domain)),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RemoveUsers {
            conference_name: conference_name.to_string(),
            domain: non_empty(&self.domain),
            remove_groups: flag(&self.remove_groups),
            remove_resource_groups: flag(&self.remove_resource_groups),
            force: flag(&self.force),
            dry_run: flag(&self.dry_run),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form() {
        let f = RemoveForm {
            conference_name: Some("Summit".into()),
            domain: Some("summit.io".into()),
            remove_groups: Some("true".into()),
            force: Some("yes".into()),
            ..Default::default()
        };

        let req = f.validate().unwrap();
        assert_eq!(req.conference_name, "Summit");
        assert_eq!(req.domain.as_deref(), Some("summit.io"));
        assert!(req.remove_groups);
        assert!(!req.remove_resource_groups);
        assert!(!req.force);
    }

    #[test]
    fn reports_name_and_domain_together() {
        let f = RemoveForm {
            conference_name: Some("   ".into()),
            domain: Some("bad_domain".into()),
            ..Default::default()
        };
        assert_eq!(
            f.validate(),
            Err(vec![FieldError::ConferenceNameRequired, FieldError::DomainInvalid])
        );
    }
}
