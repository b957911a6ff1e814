//! Customer contact details for a quote request.

use crate::error::{DesignError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// How the customer wants to be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactMethod::Email => write!(f, "Email"),
            ContactMethod::Phone => write!(f, "Phone"),
        }
    }
}

impl FromStr for ContactMethod {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(ContactMethod::Email),
            "phone" => Ok(ContactMethod::Phone),
            _ => Err(DesignError::UnknownContactMethod {
                value: s.to_string(),
            }),
        }
    }
}

/// Contact form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    /// Optional; empty means not given.
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub preferred: ContactMethod,
}

impl ContactInfo {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_preferred(mut self, preferred: ContactMethod) -> Self {
        self.preferred = preferred;
        self
    }

    /// Check the form before a quote is generated.
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(DesignError::MissingEmail);
        }
        if !email_regex().is_match(email) {
            return Err(DesignError::InvalidEmail {
                email: email.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(ContactInfo::new("pat@example.com").validate().is_ok());
        assert!(ContactInfo::new(" pat.lee@club.co.uk ").validate().is_ok());
    }

    #[test]
    fn test_missing_email() {
        assert!(matches!(
            ContactInfo::new("  ").validate(),
            Err(DesignError::MissingEmail)
        ));
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["pat", "pat@example", "pat @example.com", "@example.com", "a@b@c.d"] {
            assert!(
                matches!(
                    ContactInfo::new(email).validate(),
                    Err(DesignError::InvalidEmail { .. })
                ),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_contact_method_parse() {
        assert_eq!("Phone".parse::<ContactMethod>().unwrap(), ContactMethod::Phone);
        assert!("fax".parse::<ContactMethod>().is_err());
        assert_eq!(ContactMethod::default().to_string(), "Email");
    }
}
