//! Color code values.

use crate::error::DesignError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color code such as `#233e6d`.
///
/// Colors arriving from storage or shared links are kept verbatim; only user
/// input goes through [`FromStr`], which checks and canonicalises the code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap a color code without inspecting it.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the color code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl FromStr for Color {
    type Err = DesignError;

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional) into lowercase `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DesignError::InvalidColor {
            value: s.to_string(),
        };
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let hex = hex.to_ascii_lowercase();
        match hex.len() {
            6 => Ok(Self(format!("#{}", hex))),
            3 => {
                let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
                Ok(Self(format!("#{}", expanded)))
            }
            _ => Err(invalid()),
        }
    }
}
