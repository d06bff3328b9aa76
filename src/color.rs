use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Deserializer};

use crate::error::HighlightError;

// ---------------------------------------------------------------------------
// HighlightColor – the single fill applied to flagged rows
// ---------------------------------------------------------------------------

/// Solid fill colour for flagged rows. Parsed from a hex code (`#FFFF00`,
/// `ffff00`, `#ff0`) or a CSS colour name (`yellow`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightColor(Srgb<u8>);

impl HighlightColor {
    pub const YELLOW: HighlightColor = HighlightColor(Srgb::new(0xFF, 0xFF, 0x00));

    /// Opaque ARGB hex as stored in xlsx fills, e.g. `FFFFFF00`.
    pub fn argb(&self) -> String {
        let (r, g, b) = self.0.into_components();
        format!("FF{r:02X}{g:02X}{b:02X}")
    }
}

impl Default for HighlightColor {
    fn default() -> Self {
        Self::YELLOW
    }
}

impl FromStr for HighlightColor {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(named) = palette::named::from_str(&s.to_ascii_lowercase()) {
            return Ok(HighlightColor(named));
        }
        Srgb::<u8>::from_str(s)
            .map(HighlightColor)
            .map_err(|err| HighlightError::Config(format!("invalid colour '{s}': {err}")))
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.0.into_components();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl<'de> Deserialize<'de> for HighlightColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
