//! Per-field validation rules shared by the create and remove forms.

use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const MIN_USER_COUNT: i64 = 1;
pub const MAX_USER_COUNT: i64 = 1000;

static CONFERENCE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

// At least one dot, with an alphabetic TLD of two or more letters.
static DOMAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static SUBSCRIPTION_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .unwrap()
});

/// A user-facing validation message for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Conference Name is required")]
    ConferenceNameRequired,

    #[error("Conference Name must contain only letters, numbers, hyphens, and underscores")]
    ConferenceNameInvalid,

    #[error("User Count must be a valid number")]
    UserCountNotNumber,

    #[error("User Count must be between 1 and 1000")]
    UserCountOutOfRange,

    #[error("Domain must be a valid domain name (e.g., company.com)")]
    DomainInvalid,

    #[error("Subscription ID must be a valid GUID format")]
    SubscriptionIdInvalid,

    #[error("Please select a valid Azure location")]
    LocationInvalid,
}

impl FieldError {
    /// Name of the form field the message belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::ConferenceNameRequired | FieldError::ConferenceNameInvalid => {
                "conference_name"
            }
            FieldError::UserCountNotNumber | FieldError::UserCountOutOfRange => "user_count",
            FieldError::DomainInvalid => "domain",
            FieldError::SubscriptionIdInvalid => "subscription_id",
            FieldError::LocationInvalid => "location",
        }
    }
}

pub fn check_conference_name(name: &str) -> Result<(), FieldError> {
    if name.is_empty() {
        Err(FieldError::ConferenceNameRequired)
    } else if !CONFERENCE_NAME_PATTERN.is_match(name) {
        Err(FieldError::ConferenceNameInvalid)
    } else {
        Ok(())
    }
}

/// Parse a user count, tolerating surrounding whitespace and a sign.
///
/// Integers too large for `i64` are still integers, so they report the
/// range error rather than the not-a-number one.
pub fn parse_user_count(raw: &str) -> Result<u32, FieldError> {
    let count = match raw.trim().parse::<i64>() {
        Ok(count) => count,
        Err(e) => {
            return match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(FieldError::UserCountOutOfRange)
                }
                _ => Err(FieldError::UserCountNotNumber),
            };
        }
    };

    if !(MIN_USER_COUNT..=MAX_USER_COUNT).contains(&count) {
        return Err(FieldError::UserCountOutOfRange);
    }

    u32::try_from(count).map_err(|_| FieldError::UserCountOutOfRange)
}

/// Blank domains are allowed; the script then uses its own default.
pub fn check_domain(domain: &str) -> Result<(), FieldError> {
    if domain.is_empty() || DOMAIN_PATTERN.is_match(domain) {
        Ok(())
    } else {
        Err(FieldError::DomainInvalid)
    }
}

pub fn check_subscription_id(id: &str) -> Result<(), FieldError> {
    if id.is_empty() || SUBSCRIPTION_ID_PATTERN.is_match(id) {
        Ok(())
    } else {
        Err(FieldError::SubscriptionIdInvalid)
    }
}

pub fn check_location(location: &str, allowed: &[String]) -> Result<(), FieldError> {
    if location.is_empty() || allowed.iter().any(|l| l == location) {
        Ok(())
    } else {
        Err(FieldError::LocationInvalid)
    }
}
