//! The design store: sole owner and writer of [`DesignState`].
//!
//! Every mutation builds a complete next state and swaps it in at once, then
//! notifies subscribers with the new state. Persistence and URL encoding are
//! subscribers; the store itself knows nothing about either.

use crate::model::{
    Color, CourtSummary, CourtType, DesignState, DesignSummary, ElementType, OverlaysPatch,
};
use crate::taxonomy;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Callback invoked with the new state after every change.
pub type Listener = Box<dyn FnMut(&DesignState)>;

/// Single authoritative owner of the design state.
pub struct DesignStore {
    state: DesignState,
    hydrated: bool,
    listeners: Vec<Listener>,
}

impl Default for DesignStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DesignStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignStore")
            .field("state", &self.state)
            .field("hydrated", &self.hydrated)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl DesignStore {
    /// Create a store holding the default state, not yet hydrated.
    pub fn new() -> Self {
        Self::with_state(DesignState::default())
    }

    /// Create a store around an existing state.
    pub fn with_state(state: DesignState) -> Self {
        Self {
            state,
            hydrated: false,
            listeners: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &DesignState {
        &self.state
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&DesignState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Whether durable storage has been read (or found empty).
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn set_hydrated(&mut self, hydrated: bool) {
        self.hydrated = hydrated;
    }

    fn commit(&mut self, next: DesignState, action: &str) {
        if next == self.state {
            debug!(action, "state unchanged");
            return;
        }
        debug!(
            action,
            court = %next.selected_court,
            element = %next.selected_element,
            "state updated"
        );
        self.state = next;
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }

    /// Swap in a whole state, e.g. one restored from storage.
    pub fn replace_state(&mut self, state: DesignState) {
        self.commit(state, "replace_state");
    }

    /// Select a court. The selected element is left alone; the caller
    /// revalidates it.
    pub fn select_court(&mut self, court: CourtType) {
        let mut next = self.state.clone();
        next.selected_court = court;
        self.commit(next, "select_court");
    }

    /// Select an element on the selected court and cache its resolved color.
    ///
    /// Returns `false` (and changes nothing) if the element is not part of the
    /// selected court.
    pub fn select_element(&mut self, element: ElementType) -> bool {
        let court = self.state.selected_court;
        if !taxonomy::is_valid_element(court, element) {
            warn!("Ignoring selection of {} on {} court", element, court);
            return false;
        }
        let mut next = self.state.clone();
        next.selected_element = element;
        next.selected_color = self.state.color(court, element);
        self.commit(next, "select_element");
        true
    }

    /// Apply a color to the selected element of the selected court.
    ///
    /// Returns `false` if the current selection is stale for the court.
    pub fn set_color(&mut self, color: Color) -> bool {
        let court = self.state.selected_court;
        let element = self.state.selected_element;
        if !taxonomy::is_valid_element(court, element) {
            warn!("Selected element {} is not on the {} court", element, court);
            return false;
        }
        let mut next = self.state.clone();
        next.design_state
            .court_mut(court)
            .elements
            .insert(element, color.clone());
        next.selected_color = color;
        self.commit(next, "set_color");
        true
    }

    /// Apply a color to any (court, element) pair without touching the
    /// selection. Elements outside the court's taxonomy are rejected.
    pub fn update_court_color(
        &mut self,
        court: CourtType,
        element: ElementType,
        color: Color,
    ) -> bool {
        if !taxonomy::is_valid_element(court, element) {
            warn!("Ignoring color for {} on {} court", element, court);
            return false;
        }
        let mut next = self.state.clone();
        next.design_state.court_mut(court).elements.insert(element, color);
        self.commit(next, "update_court_color");
        true
    }

    /// Show or hide hoops/nets on one court.
    pub fn set_accessories(&mut self, court: CourtType, visible: bool) {
        let mut next = self.state.clone();
        next.design_state.court_mut(court).show_accessories = visible;
        self.commit(next, "set_accessories");
    }

    /// Merge a partial overlay update.
    pub fn set_overlays(&mut self, patch: OverlaysPatch) {
        let mut next = self.state.clone();
        next.design_state.overlays.merge(&patch);
        self.commit(next, "set_overlays");
    }

    /// Resolved color of an element on a court (explicit, else default).
    pub fn color(&self, court: CourtType, element: ElementType) -> Color {
        self.state.color(court, element)
    }

    /// Restore all designs and overlays to defaults.
    pub fn reset(&mut self, preserve_court: bool) {
        let court = if preserve_court {
            self.state.selected_court
        } else {
            CourtType::Basketball
        };
        self.commit(DesignState::with_court(court), "reset");
    }

    /// Snapshot of explicit customizations only. Elements at their default
    /// color never appear in the summary.
    pub fn summarize(&self) -> DesignSummary {
        summarize_state(&self.state)
    }
}

/// Build a defaults-omitted summary of a state.
pub fn summarize_state(state: &DesignState) -> DesignSummary {
    let courts = CourtType::ALL
        .into_iter()
        .map(|court| {
            let design = state.design_state.court(court);
            let colors: BTreeMap<ElementType, Color> = design
                .customized()
                .map(|(element, color)| (element, color.clone()))
                .collect();
            (
                court,
                CourtSummary {
                    colors,
                    show_accessories: design.show_accessories,
                },
            )
        })
        .collect();
    DesignSummary {
        courts,
        overlays: state.design_state.overlays,
    }
}
