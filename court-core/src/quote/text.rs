//! Plain-text quote request body.

use super::ContactInfo;
use crate::catalog;
use crate::model::{Color, CourtType, DesignState, ElementType, Overlays};
use crate::render::overlay_names;
use crate::taxonomy;
use chrono::NaiveDate;
use std::fmt::Write;

/// Everything a quote request describes, frozen at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSnapshot {
    pub contact: ContactInfo,
    pub court: CourtType,
    /// Resolved color of every element of `court`, in taxonomy order.
    pub colors: Vec<(ElementType, Color)>,
    pub show_accessories: bool,
    pub overlays: Overlays,
}

impl QuoteSnapshot {
    /// Snapshot the selected court of a state.
    pub fn capture(state: &DesignState, contact: ContactInfo) -> Self {
        let court = state.selected_court;
        Self {
            contact,
            court,
            colors: taxonomy::elements_for_court(court)
                .iter()
                .map(|&element| (element, state.color(court, element)))
                .collect(),
            show_accessories: state.current_design().show_accessories,
            overlays: *state.overlays(),
        }
    }
}

/// Subject line for a quote email.
pub fn quote_subject(court: CourtType) -> String {
    format!("Quote Request - {} Court Design", court.display_name())
}

/// Render the request body. The only varying input is `date`.
pub fn generate_quote_text(snapshot: &QuoteSnapshot, date: NaiveDate) -> String {
    let court_name = snapshot.court.display_name();
    let contact = &snapshot.contact;
    let mut output = String::new();

    writeln!(output, "COURT DESIGN QUOTE REQUEST").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Customer Contact Information:").unwrap();
    writeln!(output, "Email: {}", contact.email.trim()).unwrap();
    if !contact.phone.trim().is_empty() {
        writeln!(output, "Phone: {}", contact.phone.trim()).unwrap();
    }
    writeln!(output, "Preferred Contact Method: {}", contact.preferred).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "COURT SPECIFICATIONS").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Primary Court: {}", court_name).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "{} Court Components:", court_name).unwrap();
    for (element, color) in &snapshot.colors {
        writeln!(
            output,
            "  • {}: {}",
            taxonomy::element_label(*element),
            catalog::color_name(color.as_str())
        )
        .unwrap();
    }
    writeln!(
        output,
        "  • Accessories ({}): {}",
        taxonomy::accessory_label(snapshot.court),
        if snapshot.show_accessories {
            "Included"
        } else {
            "Not Included"
        }
    )
    .unwrap();

    // Every enabled overlay is quoted, including one on the primary court.
    let overlays = snapshot.overlays.enabled();
    writeln!(output).unwrap();
    writeln!(output, "Court Overlays: {}", overlay_names(&overlays)).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Request Generated: {}", date.format("%-m/%-d/%Y")).unwrap();
    writeln!(output).unwrap();
    write!(
        output,
        "Please provide a detailed quote for the above court design specifications."
    )
    .unwrap();

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OverlaysPatch;
    use crate::quote::ContactMethod;
    use crate::store::DesignStore;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn tennis_snapshot() -> QuoteSnapshot {
        let mut store = DesignStore::new();
        store.select_court(CourtType::Tennis);
        store.select_element(ElementType::TennisPlayingArea);
        store.set_color(Color::new("#111f2c"));
        store.select_element(ElementType::TennisLines);
        store.set_color(Color::new("#abcdef"));
        store.set_overlays(OverlaysPatch {
            basketball: None,
            tennis: Some(true),
            pickleball: Some(true),
        });
        let contact = ContactInfo::new("pat@example.com")
            .with_phone("(555) 123-4567")
            .with_preferred(ContactMethod::Phone);
        QuoteSnapshot::capture(store.state(), contact)
    }

    #[test]
    fn test_quote_text_layout() {
        let text = generate_quote_text(&tennis_snapshot(), date());
        insta::assert_snapshot!(text, @r"
        COURT DESIGN QUOTE REQUEST

        Customer Contact Information:
        Email: pat@example.com
        Phone: (555) 123-4567
        Preferred Contact Method: Phone

        COURT SPECIFICATIONS

        Primary Court: Tennis

        Tennis Court Components:
          • Background: Gray
          • Playing Area: Nautical Navy
          • Court Lines: Custom Color
          • Accessories (Net): Included

        Court Overlays: Tennis, Pickleball

        Request Generated: 10/17/2026

        Please provide a detailed quote for the above court design specifications.
        ");
    }

    #[test]
    fn test_quote_text_is_deterministic() {
        let snapshot = tennis_snapshot();
        assert_eq!(
            generate_quote_text(&snapshot, date()),
            generate_quote_text(&snapshot, date())
        );
    }

    #[test]
    fn test_no_phone_no_overlays() {
        let mut store = DesignStore::new();
        store.set_accessories(CourtType::Basketball, false);
        let snapshot = QuoteSnapshot::capture(store.state(), ContactInfo::new("pat@example.com"));
        let text = generate_quote_text(&snapshot, date());
        assert!(!text.contains("Phone:"));
        assert!(text.contains("Preferred Contact Method: Email\n"));
        assert!(text.contains("  • Three Second Area: Competition Blue\n"));
        assert!(text.contains("  • Accessories (Hoops): Not Included\n"));
        assert!(text.contains("\nCourt Overlays: None\n"));
    }

    #[test]
    fn test_primary_court_overlay_is_quoted() {
        let mut store = DesignStore::new();
        store.set_overlays(OverlaysPatch {
            basketball: Some(true),
            tennis: Some(true),
            pickleball: None,
        });
        let snapshot = QuoteSnapshot::capture(store.state(), ContactInfo::new("pat@example.com"));
        assert_eq!(snapshot.court, CourtType::Basketball);
        let text = generate_quote_text(&snapshot, date());
        assert!(text.contains("\nCourt Overlays: Basketball, Tennis\n"));
    }

    #[test]
    fn test_subject() {
        assert_eq!(
            quote_subject(CourtType::Pickleball),
            "Quote Request - Pickleball Court Design"
        );
    }
}
