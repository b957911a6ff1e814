//! Quote requests: contact details, the plain-text request body, and the
//! `mailto:` hand-off.

mod contact;
mod mail;
mod text;

pub use contact::{ContactInfo, ContactMethod};
pub use mail::{compose_mailto, submit_quote, MailLauncher, QuoteRequest};
pub use text::{generate_quote_text, quote_subject, QuoteSnapshot};
