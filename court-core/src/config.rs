//! Configuration constants and settings for the designer.

/// Local storage key holding the full persisted design state.
pub const STORAGE_KEY: &str = "court-design-storage";

/// Local storage key holding the last address-bar location.
pub const LOCATION_KEY: &str = "court-design-location";

/// Query parameter carrying the shareable design summary.
pub const DESIGN_PARAM: &str = "design";

/// Schema version written alongside persisted state.
pub const STORAGE_VERSION: u32 = 1;

/// Environment variable overriding the quote recipient.
pub const QUOTE_EMAIL_ENV: &str = "COURT_QUOTE_EMAIL";

/// Default origin used when building shareable links.
pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Recipient of quote requests. Empty means the mail client asks.
    pub quote_email: String,
}

impl AppConfig {
    /// Create a configuration with an explicit quote recipient.
    pub fn new(quote_email: impl Into<String>) -> Self {
        Self {
            quote_email: quote_email.into(),
        }
    }

    /// Build the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(email) = lookup(QUOTE_EMAIL_ENV) {
            let email = email.trim();
            if !email.is_empty() {
                config.quote_email = email.to_string();
            }
        }
        config
    }

    /// Apply an optional override (for example a CLI flag).
    pub fn with_quote_email(mut self, email: Option<String>) -> Self {
        if let Some(email) = email {
            self.quote_email = email;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lookup_reads_quote_email() {
        let config = AppConfig::from_lookup(|key| {
            (key == QUOTE_EMAIL_ENV).then(|| " quotes@example.com ".to_string())
        });
        assert_eq!(config.quote_email, "quotes@example.com");
    }

    #[test]
    fn test_from_lookup_blank_is_default() {
        let config = AppConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_override_wins() {
        let config = AppConfig::new("a@example.com").with_quote_email(Some("b@example.com".into()));
        assert_eq!(config.quote_email, "b@example.com");
        let config = config.with_quote_email(None);
        assert_eq!(config.quote_email, "b@example.com");
    }
}
