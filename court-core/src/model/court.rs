//! Court types and the colorable elements of their diagrams.

use crate::error::DesignError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sport court selecting which diagram and element set apply.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CourtType {
    #[default]
    Basketball,
    Tennis,
    Pickleball,
}

impl CourtType {
    /// Every court type, in menu order.
    pub const ALL: [CourtType; 3] = [
        CourtType::Basketball,
        CourtType::Tennis,
        CourtType::Pickleball,
    ];

    /// Route and wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CourtType::Basketball => "basketball",
            CourtType::Tennis => "tennis",
            CourtType::Pickleball => "pickleball",
        }
    }

    /// Capitalized name for human-readable output.
    pub fn display_name(&self) -> &'static str {
        match self {
            CourtType::Basketball => "Basketball",
            CourtType::Tennis => "Tennis",
            CourtType::Pickleball => "Pickleball",
        }
    }
}

impl fmt::Display for CourtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CourtType {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourtType::ALL
            .into_iter()
            .find(|court| court.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DesignError::UnknownCourt {
                name: s.to_string(),
            })
    }
}

/// A named, colorable region of a court diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    // Shared by every court
    BaseBackground,
    // Basketball
    PlayingArea,
    Lines,
    ThreePoint,
    CenterCircle,
    ThreeSecondArea,
    // Tennis
    TennisPlayingArea,
    TennisLines,
    // Pickleball
    PickleballKitchen,
    PickleballServiceArea,
    PickleballLines,
}

impl ElementType {
    /// Every element type known to any court.
    pub const ALL: [ElementType; 11] = [
        ElementType::BaseBackground,
        ElementType::PlayingArea,
        ElementType::Lines,
        ElementType::ThreePoint,
        ElementType::CenterCircle,
        ElementType::ThreeSecondArea,
        ElementType::TennisPlayingArea,
        ElementType::TennisLines,
        ElementType::PickleballKitchen,
        ElementType::PickleballServiceArea,
        ElementType::PickleballLines,
    ];

    /// Wire name used in URLs and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::BaseBackground => "base-background",
            ElementType::PlayingArea => "playing-area",
            ElementType::Lines => "lines",
            ElementType::ThreePoint => "three-point",
            ElementType::CenterCircle => "center-circle",
            ElementType::ThreeSecondArea => "three-second-area",
            ElementType::TennisPlayingArea => "tennis-playing-area",
            ElementType::TennisLines => "tennis-lines",
            ElementType::PickleballKitchen => "pickleball-kitchen",
            ElementType::PickleballServiceArea => "pickleball-service-area",
            ElementType::PickleballLines => "pickleball-lines",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .into_iter()
            .find(|element| element.as_str() == s.trim())
            .ok_or_else(|| DesignError::UnknownElement {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_from_str() {
        assert_eq!("tennis".parse::<CourtType>().unwrap(), CourtType::Tennis);
        assert_eq!(
            " Pickleball ".parse::<CourtType>().unwrap(),
            CourtType::Pickleball
        );
        assert!("golf".parse::<CourtType>().is_err());
    }

    #[test]
    fn test_element_names_match_serde() {
        for element in ElementType::ALL {
            let json = serde_json::to_string(&element).unwrap();
            assert_eq!(json, format!("\"{}\"", element.as_str()));
            assert_eq!(element.as_str().parse::<ElementType>().unwrap(), element);
        }
    }

    #[test]
    fn test_court_serde_is_lowercase() {
        let json = serde_json::to_string(&CourtType::Pickleball).unwrap();
        assert_eq!(json, "\"pickleball\"");
    }
}
