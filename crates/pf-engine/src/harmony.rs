//! Harmony table — fixed hue offsets from a shared base hue.
//!
//! Every kind maps to five signed offsets in degrees, one per slot. The
//! first offset is not always zero: analogous palettes put the base hue in
//! the middle slot.

use serde::{Deserialize, Serialize};

use crate::palette::PALETTE_SIZE;

/// A hue relationship between the five slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    /// Base, its opposite, and small detunings of both.
    Complementary,
    /// Neighbors within ±30°.
    Analogous,
    /// Three hues 120° apart.
    Triadic,
    /// Four hues 90° apart.
    Tetradic,
    /// One hue; lightness steps instead.
    Mono,
    /// Five hues 72° apart. Used for any unrecognized kind.
    Pentadic,
}

impl HarmonyKind {
    /// Hue offset per slot, in degrees.
    #[must_use]
    pub const fn offsets(self) -> [i32; PALETTE_SIZE] {
        match self {
            Self::Complementary => [0, 180, -10, 170, 20],
            Self::Analogous => [-30, -10, 0, 10, 30],
            Self::Triadic => [0, 120, -120, 10, -110],
            Self::Tetradic => [0, 90, 180, -90, 20],
            Self::Mono => [0, 0, 0, 0, 0],
            Self::Pentadic => [0, 72, 144, 216, 288],
        }
    }

    /// Whether lightness steps across slots instead of hue.
    #[must_use]
    pub const fn is_mono(self) -> bool {
        matches!(self, Self::Mono)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Mono => "mono",
            Self::Pentadic => "pentadic",
        }
    }

    /// Parse a harmony name (case-insensitive). Unknown names fall back to
    /// [`HarmonyKind::Pentadic`] rather than failing.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let lower = name.trim().to_lowercase();
        let kind = match lower.as_str() {
            "monochrome" | "monochromatic" => Some(Self::Mono),
            _ => Self::all().iter().find(|k| k.name() == lower).copied(),
        };
        kind.unwrap_or_else(|| {
            log::debug!("unknown harmony {name:?}, using evenly spaced hues");
            Self::Pentadic
        })
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Analogous,
            Self::Triadic,
            Self::Tetradic,
            Self::Mono,
            Self::Pentadic,
        ]
    }
}
