//! Handing a finished quote request to the user's mail client.

use super::{generate_quote_text, quote_subject, QuoteSnapshot};
use crate::config::AppConfig;
use crate::error::Result;
use crate::sync::url::URI_COMPONENT;
use chrono::NaiveDate;
use percent_encoding::utf8_percent_encode;
use tracing::info;

/// Opens a composed `mailto:` URI. Whether the mail is sent is out of our
/// hands.
pub trait MailLauncher {
    fn launch(&mut self, uri: &str) -> Result<()>;
}

/// A composed quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub subject: String,
    pub body: String,
    pub uri: String,
}

/// Build a `mailto:` URI with `encodeURIComponent`-style escaping.
pub fn compose_mailto(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient.trim(),
        utf8_percent_encode(subject, URI_COMPONENT),
        utf8_percent_encode(body, URI_COMPONENT)
    )
}

/// Validate the contact details, build the request and launch it.
///
/// Nothing is generated or launched if the contact form is invalid.
pub fn submit_quote(
    snapshot: &QuoteSnapshot,
    config: &AppConfig,
    date: NaiveDate,
    launcher: &mut dyn MailLauncher,
) -> Result<QuoteRequest> {
    snapshot.contact.validate()?;

    let subject = quote_subject(snapshot.court);
    let body = generate_quote_text(snapshot, date);
    let uri = compose_mailto(&config.quote_email, &subject, &body);

    info!("Composing quote request for {} court", snapshot.court);
    launcher.launch(&uri)?;

    Ok(QuoteRequest { subject, body, uri })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesignError;
    use crate::model::DesignState;
    use crate::quote::ContactInfo;

    #[derive(Default)]
    struct Recorder {
        launched: Vec<String>,
    }

    impl MailLauncher for Recorder {
        fn launch(&mut self, uri: &str) -> Result<()> {
            self.launched.push(uri.to_string());
            Ok(())
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    #[test]
    fn test_compose_mailto_escapes() {
        let uri = compose_mailto("quotes@example.com", "Quote Request - Tennis", "a b\n&c=d");
        assert_eq!(
            uri,
            "mailto:quotes@example.com?subject=Quote%20Request%20-%20Tennis&body=a%20b%0A%26c%3Dd"
        );
    }

    #[test]
    fn test_submit_launches_mailto() {
        let snapshot = QuoteSnapshot::capture(
            &DesignState::default(),
            ContactInfo::new("pat@example.com"),
        );
        let mut recorder = Recorder::default();
        let request = submit_quote(
            &snapshot,
            &AppConfig::new("quotes@example.com"),
            date(),
            &mut recorder,
        )
        .unwrap();

        assert_eq!(request.subject, "Quote Request - Basketball Court Design");
        assert!(request.body.contains("Request Generated: 1/5/2026"));
        assert_eq!(recorder.launched, vec![request.uri.clone()]);
        assert!(request
            .uri
            .starts_with("mailto:quotes@example.com?subject=Quote%20Request%20-%20Basketball"));
    }

    #[test]
    fn test_invalid_contact_blocks_submission() {
        let snapshot = QuoteSnapshot::capture(&DesignState::default(), ContactInfo::new("nope"));
        let mut recorder = Recorder::default();
        let result = submit_quote(&snapshot, &AppConfig::default(), date(), &mut recorder);
        assert!(matches!(result, Err(DesignError::InvalidEmail { .. })));
        assert!(recorder.launched.is_empty());
    }
}
