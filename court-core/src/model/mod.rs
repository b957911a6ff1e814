//! Data model for court designs.

mod color;
mod court;
mod design;

pub use color::Color;
pub use court::{CourtType, ElementType};
pub use design::{
    CourtDesign, CourtDesigns, CourtSummary, DesignState, DesignSummary, Overlays, OverlaysPatch,
};
