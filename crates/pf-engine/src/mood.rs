//! Mood table: saturation/lightness sampling ranges, hue left free.

use serde::{Deserialize, Serialize};

/// A named saturation/lightness character for a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    /// Washed-out pastels.
    Calm,
    /// Saturated mid-tones.
    Energetic,
    /// Muted, darker neutrals.
    Professional,
    /// Saturated and bright.
    Playful,
    /// Faded mid-saturation.
    Vintage,
}

impl MoodKind {
    /// Inclusive saturation range, percent.
    #[must_use]
    pub const fn saturation_range(self) -> (i32, i32) {
        match self {
            Self::Calm => (10, 40),
            Self::Energetic => (60, 95),
            Self::Professional => (5, 30),
            Self::Playful => (55, 95),
            Self::Vintage => (20, 50),
        }
    }

    /// Inclusive lightness range, percent.
    #[must_use]
    pub const fn lightness_range(self) -> (i32, i32) {
        match self {
            Self::Calm => (60, 85),
            Self::Energetic => (45, 70),
            Self::Professional => (30, 60),
            Self::Playful => (55, 80),
            Self::Vintage => (45, 75),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Professional => "professional",
            Self::Playful => "playful",
            Self::Vintage => "vintage",
        }
    }

    /// Parse a mood name (case-insensitive). `"random"` and unknown names
    /// give `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|m| m.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Calm,
            Self::Energetic,
            Self::Professional,
            Self::Playful,
            Self::Vintage,
        ]
    }
}
