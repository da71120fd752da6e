//! Uniform temperature / saturation / lightness adjustment.
//!
//! The adjustment vector comes straight from three UI sliders (roughly
//! -100..=100 each) and is scaled down before it touches the color: hue moves
//! 0.6° per unit, saturation and lightness move half a percentage point per
//! unit. The scales are fixed.

use pf_color::Rgb;
use serde::{Deserialize, Serialize};

/// Degrees of hue rotation per unit of temperature.
pub const HUE_PER_UNIT: f64 = 0.6;

/// Saturation/lightness percentage points per unit.
pub const PERCENT_PER_UNIT: f64 = 0.5;

/// Offsets applied to every unlocked color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AdjustmentVector {
    pub temperature: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl AdjustmentVector {
    /// All sliders at rest. The engine treats it as a no-op.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(temperature: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            temperature,
            saturation,
            lightness,
        }
    }

    /// Whether applying this vector can change a color.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.temperature == 0.0 && self.saturation == 0.0 && self.lightness == 0.0
    }
}

/// Rotate hue, then shift and clamp saturation and lightness.
///
/// The color is read as whole-number HSL before the offsets are added, so
/// even [`AdjustmentVector::ZERO`] can move a channel by a few units (at
/// most 5, greys at most 1). Callers that want an exact no-op check
/// [`AdjustmentVector::is_zero`] first, as the engine does.
#[must_use]
pub fn adjust(color: Rgb, vector: AdjustmentVector) -> Rgb {
    let hsl = color.to_hsl();
    let h = vector.temperature.mul_add(HUE_PER_UNIT, f64::from(hsl.h)).rem_euclid(360.0);
    let s = vector.saturation.mul_add(PERCENT_PER_UNIT, f64::from(hsl.s)).clamp(0.0, 100.0);
    let l = vector.lightness.mul_add(PERCENT_PER_UNIT, f64::from(hsl.l)).clamp(0.0, 100.0);
    Rgb::from_hsl_f64(h, s, l)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
