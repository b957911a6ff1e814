//! Which elements each court has, and their default colors and labels.
//!
//! This module is the single source of truth for element validity: the store,
//! the URL protocol and persistence all ask it before accepting an element.

use crate::model::{Color, CourtType, ElementType};

const BASKETBALL_ELEMENTS: [ElementType; 6] = [
    ElementType::BaseBackground,
    ElementType::PlayingArea,
    ElementType::Lines,
    ElementType::ThreePoint,
    ElementType::CenterCircle,
    ElementType::ThreeSecondArea,
];

const TENNIS_ELEMENTS: [ElementType; 3] = [
    ElementType::BaseBackground,
    ElementType::TennisPlayingArea,
    ElementType::TennisLines,
];

const PICKLEBALL_ELEMENTS: [ElementType; 4] = [
    ElementType::BaseBackground,
    ElementType::PickleballKitchen,
    ElementType::PickleballServiceArea,
    ElementType::PickleballLines,
];

/// Ordered list of elements valid for a court. The first entry is always
/// `base-background`.
pub fn elements_for_court(court: CourtType) -> &'static [ElementType] {
    match court {
        CourtType::Basketball => &BASKETBALL_ELEMENTS,
        CourtType::Tennis => &TENNIS_ELEMENTS,
        CourtType::Pickleball => &PICKLEBALL_ELEMENTS,
    }
}

/// Check whether an element belongs to a court's diagram.
pub fn is_valid_element(court: CourtType, element: ElementType) -> bool {
    elements_for_court(court).contains(&element)
}

/// Default color code for an element.
pub fn default_color_code(element: ElementType) -> &'static str {
    match element {
        ElementType::BaseBackground => "#6c6d6f",        // Gray
        ElementType::PlayingArea => "#233e6d",           // Standard Blue
        ElementType::Lines => "#ffffff",                 // Brilliant White
        ElementType::ThreePoint => "#1a3054",            // Competition Blue
        ElementType::CenterCircle => "#1a3054",          // Competition Blue
        ElementType::ThreeSecondArea => "#1a3054",       // Competition Blue
        ElementType::TennisPlayingArea => "#7b3522",     // Classic Red
        ElementType::TennisLines => "#ffffff",           // Brilliant White
        ElementType::PickleballKitchen => "#233e6d",     // Standard Blue
        ElementType::PickleballServiceArea => "#445f43", // Competition Green
        ElementType::PickleballLines => "#ffffff",       // Brilliant White
    }
}

/// Default color for an element.
pub fn default_color(element: ElementType) -> Color {
    Color::new(default_color_code(element))
}

/// Display label for an element.
pub fn element_label(element: ElementType) -> &'static str {
    match element {
        ElementType::BaseBackground => "Background",
        ElementType::PlayingArea => "Playing Area",
        ElementType::Lines => "Court Lines",
        ElementType::ThreePoint => "Three Point Area",
        ElementType::CenterCircle => "Center Circle",
        ElementType::ThreeSecondArea => "Three Second Area",
        ElementType::TennisPlayingArea => "Playing Area",
        ElementType::TennisLines => "Court Lines",
        ElementType::PickleballKitchen => "Kitchen",
        ElementType::PickleballServiceArea => "Service Area",
        ElementType::PickleballLines => "Court Lines",
    }
}

/// Label for an element name that may not be known, e.g. one read from a
/// newer shared link. Unknown names are title-cased word by word.
pub fn label_for_name(name: &str) -> String {
    if let Ok(element) = name.parse::<ElementType>() {
        return element_label(element).to_string();
    }
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Regulation size blurb for a court.
pub fn court_specification(court: CourtType) -> &'static str {
    match court {
        CourtType::Basketball => "94' x 50' regulation size",
        CourtType::Tennis => "78' x 36' regulation size",
        CourtType::Pickleball => "44' x 20' regulation size",
    }
}

/// What the accessory toggle draws on a court.
pub fn accessory_label(court: CourtType) -> &'static str {
    match court {
        CourtType::Basketball => "Hoops",
        CourtType::Tennis | CourtType::Pickleball => "Net",
    }
}
