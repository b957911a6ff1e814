//! Design state: per-court colors, accessories, overlays and selection.

use super::{Color, CourtType, ElementType};
use crate::taxonomy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Color assignments and accessory visibility for one court.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtDesign {
    /// Element colors. Only elements of this court appear as keys.
    pub elements: BTreeMap<ElementType, Color>,
    /// Whether hoops/nets are drawn.
    pub show_accessories: bool,
}

impl CourtDesign {
    /// Default design for a court: taxonomy colors, accessories on.
    pub fn for_court(court: CourtType) -> Self {
        let elements = taxonomy::elements_for_court(court)
            .iter()
            .map(|&element| (element, taxonomy::default_color(element)))
            .collect();
        Self {
            elements,
            show_accessories: true,
        }
    }

    /// Explicit color for an element, if any.
    pub fn color(&self, element: ElementType) -> Option<&Color> {
        self.elements.get(&element)
    }

    /// Entries whose color differs from the taxonomy default.
    pub fn customized(&self) -> impl Iterator<Item = (ElementType, &Color)> + '_ {
        self.elements
            .iter()
            .filter(|(element, color)| **color != taxonomy::default_color(**element))
            .map(|(element, color)| (*element, color))
    }
}

/// Which other court outlines are drawn on top of the selected court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overlays {
    #[serde(default)]
    pub basketball: bool,
    #[serde(default)]
    pub tennis: bool,
    #[serde(default)]
    pub pickleball: bool,
}

impl Overlays {
    pub fn get(&self, court: CourtType) -> bool {
        match court {
            CourtType::Basketball => self.basketball,
            CourtType::Tennis => self.tennis,
            CourtType::Pickleball => self.pickleball,
        }
    }

    pub fn set(&mut self, court: CourtType, enabled: bool) {
        match court {
            CourtType::Basketball => self.basketball = enabled,
            CourtType::Tennis => self.tennis = enabled,
            CourtType::Pickleball => self.pickleball = enabled,
        }
    }

    /// Apply only the keys present in a patch.
    pub fn merge(&mut self, patch: &OverlaysPatch) {
        for court in CourtType::ALL {
            if let Some(enabled) = patch.get(court) {
                self.set(court, enabled);
            }
        }
    }

    /// Enabled overlays in court order. Includes a self-overlay if one is set.
    pub fn enabled(&self) -> Vec<CourtType> {
        CourtType::ALL
            .into_iter()
            .filter(|court| self.get(*court))
            .collect()
    }

    /// Enabled overlays that should actually be drawn over `selected`.
    pub fn visible_over(&self, selected: CourtType) -> Vec<CourtType> {
        self.enabled()
            .into_iter()
            .filter(|court| *court != selected)
            .collect()
    }

    pub fn any(&self) -> bool {
        CourtType::ALL.into_iter().any(|court| self.get(court))
    }
}

/// A partial overlay update. Absent keys are left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlaysPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basketball: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tennis: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickleball: Option<bool>,
}

impl OverlaysPatch {
    /// Patch touching a single court.
    pub fn only(court: CourtType, enabled: bool) -> Self {
        let mut patch = Self::default();
        match court {
            CourtType::Basketball => patch.basketball = Some(enabled),
            CourtType::Tennis => patch.tennis = Some(enabled),
            CourtType::Pickleball => patch.pickleball = Some(enabled),
        }
        patch
    }

    pub fn get(&self, court: CourtType) -> Option<bool> {
        match court {
            CourtType::Basketball => self.basketball,
            CourtType::Tennis => self.tennis,
            CourtType::Pickleball => self.pickleball,
        }
    }
}

impl From<Overlays> for OverlaysPatch {
    fn from(overlays: Overlays) -> Self {
        Self {
            basketball: Some(overlays.basketball),
            tennis: Some(overlays.tennis),
            pickleball: Some(overlays.pickleball),
        }
    }
}

/// Durable design data for all courts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtDesigns {
    pub basketball: CourtDesign,
    pub tennis: CourtDesign,
    pub pickleball: CourtDesign,
    pub overlays: Overlays,
}

impl Default for CourtDesigns {
    fn default() -> Self {
        Self {
            basketball: CourtDesign::for_court(CourtType::Basketball),
            tennis: CourtDesign::for_court(CourtType::Tennis),
            pickleball: CourtDesign::for_court(CourtType::Pickleball),
            overlays: Overlays::default(),
        }
    }
}

impl CourtDesigns {
    pub fn court(&self, court: CourtType) -> &CourtDesign {
        match court {
            CourtType::Basketball => &self.basketball,
            CourtType::Tennis => &self.tennis,
            CourtType::Pickleball => &self.pickleball,
        }
    }

    pub fn court_mut(&mut self, court: CourtType) -> &mut CourtDesign {
        match court {
            CourtType::Basketball => &mut self.basketball,
            CourtType::Tennis => &mut self.tennis,
            CourtType::Pickleball => &mut self.pickleball,
        }
    }
}

/// The root aggregate owned by the design store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignState {
    pub selected_court: CourtType,
    pub selected_element: ElementType,
    /// Resolved color of `selected_element` on `selected_court`.
    pub selected_color: Color,
    pub design_state: CourtDesigns,
}

impl Default for DesignState {
    fn default() -> Self {
        Self::with_court(CourtType::Basketball)
    }
}

impl DesignState {
    /// Default state with a specific court selected.
    pub fn with_court(court: CourtType) -> Self {
        Self {
            selected_court: court,
            selected_element: ElementType::BaseBackground,
            selected_color: taxonomy::default_color(ElementType::BaseBackground),
            design_state: CourtDesigns::default(),
        }
    }

    /// Resolve the color of an element on a court, falling back to the
    /// taxonomy default.
    pub fn color(&self, court: CourtType, element: ElementType) -> Color {
        self.design_state
            .court(court)
            .color(element)
            .cloned()
            .unwrap_or_else(|| taxonomy::default_color(element))
    }

    pub fn overlays(&self) -> &Overlays {
        &self.design_state.overlays
    }

    /// Design of the selected court.
    pub fn current_design(&self) -> &CourtDesign {
        self.design_state.court(self.selected_court)
    }
}

/// Customizations of a single court as shared in links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtSummary {
    pub colors: BTreeMap<ElementType, Color>,
    pub show_accessories: bool,
}

/// Defaults-omitted snapshot of every court plus overlays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignSummary {
    #[serde(flatten)]
    pub courts: BTreeMap<CourtType, CourtSummary>,
    pub overlays: Overlays,
}

impl DesignSummary {
    pub fn court(&self, court: CourtType) -> Option<&CourtSummary> {
        self.courts.get(&court)
    }
}
