//! What the court diagram renderer receives on each draw.
//!
//! The renderer is a collaborator: it is handed a [`RenderFrame`] and never
//! calls back into the store.

use crate::catalog;
use crate::error::Result;
use crate::model::{Color, CourtType, DesignState, ElementType};
use crate::taxonomy;
use std::fmt::Write;

/// Everything needed to draw the selected court once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub court: CourtType,
    /// Resolved color of every element of the court, in taxonomy order.
    pub colors: Vec<(ElementType, Color)>,
    pub show_accessories: bool,
    /// Other courts whose outlines are drawn on top. Never contains `court`.
    pub overlays: Vec<CourtType>,
}

impl RenderFrame {
    /// Capture a frame for the selected court of a state.
    pub fn capture(state: &DesignState) -> Self {
        let court = state.selected_court;
        let colors = taxonomy::elements_for_court(court)
            .iter()
            .map(|&element| (element, state.color(court, element)))
            .collect();
        Self {
            court,
            colors,
            show_accessories: state.current_design().show_accessories,
            overlays: state.overlays().visible_over(court),
        }
    }
}

/// A court diagram renderer.
pub trait Renderer {
    fn draw(&mut self, frame: &RenderFrame) -> Result<()>;
}

/// Plain-text legend of a frame.
pub fn legend(frame: &RenderFrame) -> String {
    let mut output = String::new();
    writeln!(
        output,
        "{} court ({})",
        frame.court.display_name(),
        taxonomy::court_specification(frame.court)
    )
    .unwrap();
    for (element, color) in &frame.colors {
        writeln!(
            output,
            "  {:<18} {}  {}",
            taxonomy::element_label(*element),
            color,
            catalog::color_name(color.as_str())
        )
        .unwrap();
    }
    writeln!(
        output,
        "  {}: {}",
        taxonomy::accessory_label(frame.court),
        if frame.show_accessories { "shown" } else { "hidden" }
    )
    .unwrap();
    writeln!(output, "  Overlays: {}", overlay_names(&frame.overlays)).unwrap();
    output
}

/// Comma-joined court names, or `None`.
pub fn overlay_names(courts: &[CourtType]) -> String {
    if courts.is_empty() {
        return "None".to_string();
    }
    courts
        .iter()
        .map(|court| court.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}
