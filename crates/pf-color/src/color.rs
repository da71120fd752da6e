// SPDX-License-Identifier: MIT
//
// pf-color color model: packed 8-bit RGB and integer HSL.
//
// Conversion pipeline:
//
//   Rgb (u8 × 3) ↔ unit floats (0.0–1.0) ↔ HSL floats ↔ Hsl (u16, u8, u8)
//
// The float stage is exposed (`to_hsl_f64` / `from_hsl_f64`) because the
// integer stage is lossy: rounding hue to whole degrees and saturation and
// lightness to whole percent can move a chromatic color by a few units per
// channel on the way back. The float path round-trips every 8-bit color
// exactly, and `from_hsl_f64` accepts fractional hues and percentages that
// come out of slider arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::hex::{self, FormatError};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// Serializes as its canonical `#RRGGBB` string, so palettes stored by
/// callers read the same way they are shown.
///
/// ```
/// use pf_color::Rgb;
///
/// let plum: Rgb = "7c3aed".parse().unwrap();
/// assert_eq!(plum, Rgb::new(124, 58, 237));
/// assert_eq!(plum.to_hex(), "#7C3AED");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` / `RRGGBB`.
    ///
    /// # Errors
    ///
    /// See [`hex::parse_hex`].
    pub fn from_hex(s: &str) -> Result<Self, FormatError> {
        hex::parse_hex(s)
    }

    /// Canonical `#RRGGBB`, uppercase.
    #[must_use]
    pub fn to_hex(self) -> String {
        hex::format_hex(self)
    }

    /// Channels as a tuple, for destructuring.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Whether all three channels are equal (a gray, black or white).
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Squared Euclidean distance in RGB space.
    #[must_use]
    pub fn distance_sq(self, other: Self) -> u32 {
        let d = |a: u8, b: u8| {
            let v = u32::from(a.abs_diff(b));
            v * v
        };
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }

    /// Largest per-channel difference.
    #[must_use]
    pub fn max_channel_diff(self, other: Self) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }

    // ─── HSL ─────────────────────────────────────────────────────────────

    /// Convert to integer HSL (hue in whole degrees, saturation and
    /// lightness in whole percent).
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (h, s, l) = self.to_hsl_f64();
        Hsl::new(round_hue(h), round_percent(s), round_percent(l))
    }

    /// Convert to unrounded HSL: hue in `[0, 360)`, saturation and
    /// lightness in `[0, 100]`.
    ///
    /// Achromatic colors report hue 0 and saturation 0.
    #[must_use]
    pub fn to_hsl_f64(self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max_ch = self.r.max(self.g).max(self.b);
        let min_ch = self.r.min(self.g).min(self.b);
        let max = f64::from(max_ch) / 255.0;
        let min = f64::from(min_ch) / 255.0;
        let l = (max + min) / 2.0;

        if max_ch == min_ch {
            return (0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // Sextant of the color wheel, chosen by which channel dominates.
        // Red wins ties, then green.
        let sextant = if max_ch == self.r {
            (g - b) / d + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max_ch == self.g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (sextant * 60.0, s * 100.0, l * 100.0)
    }

    /// Convert integer HSL to RGB.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_hsl_f64(f64::from(hsl.h), f64::from(hsl.s), f64::from(hsl.l))
    }

    /// Convert unrounded HSL to RGB.
    ///
    /// Hue is wrapped into `[0, 360)`; saturation and lightness are clamped
    /// into `[0, 100]`, so slightly out-of-range intermediates still land on
    /// a valid color.
    #[must_use]
    pub fn from_hsl_f64(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = (s / 100.0).clamp(0.0, 1.0);
        let l = (l / 100.0).clamp(0.0, 1.0);

        if s <= 0.0 {
            let v = unit_to_u8(l);
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
        let p = 2.0f64.mul_add(l, -q);

        Self::new(
            unit_to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
            unit_to_u8(hue_to_channel(p, q, h)),
            unit_to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::parse_hex(s)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = FormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        hex::parse_hex(&s)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Integer HSL: hue in `[0, 360)` degrees, saturation and lightness in
/// `[0, 100]` percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    /// Hue angle in whole degrees. 0 for achromatic colors.
    pub h: u16,
    /// Saturation percent.
    pub s: u8,
    /// Lightness percent.
    pub l: u8,
}

impl Hsl {
    /// Build an HSL value, wrapping the hue and clamping the percentages.
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: if s > 100 { 100 } else { s },
            l: if l > 100 { 100 } else { l },
        }
    }

    /// Build from signed components: any hue wraps modulo 360, percentages
    /// clamp into `[0, 100]`.
    #[must_use]
    pub fn wrapping(h: i32, s: i32, l: i32) -> Self {
        Self {
            h: h.rem_euclid(360) as u16,
            s: s.clamp(0, 100) as u8,
            l: l.clamp(0, 100) as u8,
        }
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        Rgb::from_hsl(self)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Piecewise interpolation for one channel, `t` being the hue offset of that
/// channel in turns.
#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

/// Unit float (0.0–1.0) to a channel, rounding half up.
#[inline]
fn unit_to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Whole degrees in `[0, 360)`. A hue that rounds up to 360 wraps to 0.
#[inline]
fn round_hue(h: f64) -> u16 {
    h.round().rem_euclid(360.0) as u16
}

#[inline]
fn round_percent(v: f64) -> u8 {
    v.round().clamp(0.0, 100.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Known Values ─────────────────────────────────────────────────────

    #[test]
    fn primaries_to_hsl() {
        assert_eq!(Rgb::new(255, 0, 0).to_hsl(), Hsl::new(0, 100, 50));
        assert_eq!(Rgb::new(0, 255, 0).to_hsl(), Hsl::new(120, 100, 50));
        assert_eq!(Rgb::new(0, 0, 255).to_hsl(), Hsl::new(240, 100, 50));
    }

    #[test]
    fn plum_to_hsl() {
        assert_eq!(Rgb::new(124, 58, 237).to_hsl(), Hsl::new(262, 83, 58));
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        assert_eq!(Rgb::BLACK.to_hsl(), Hsl::new(0, 0, 0));
        assert_eq!(Rgb::WHITE.to_hsl(), Hsl::new(0, 0, 100));
        assert_eq!(Rgb::new(128, 128, 128).to_hsl(), Hsl::new(0, 0, 50));
    }

    #[test]
    fn hsl_to_primaries() {
        assert_eq!(Hsl::new(0, 100, 50).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsl::new(120, 100, 50).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsl::new(240, 100, 50).to_rgb(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn zero_saturation_is_gray_at_lightness() {
        assert_eq!(Hsl::new(200, 0, 50).to_rgb(), Rgb::new(128, 128, 128));
        assert_eq!(Hsl::new(0, 0, 100).to_rgb(), Rgb::WHITE);
        assert_eq!(Hsl::new(0, 0, 0).to_rgb(), Rgb::BLACK);
    }

    #[test]
    fn hue_just_below_full_turn_wraps_to_zero() {
        // Magenta-leaning red: the sextant lands at ~359.8 degrees.
        let hsl = Rgb::new(255, 0, 1).to_hsl();
        assert_eq!(hsl.h, 0);
        assert!(hsl.h < 360);
    }

    #[test]
    fn red_wins_channel_ties() {
        // r == g == max: hue from the red branch is 60.
        assert_eq!(Rgb::new(255, 255, 0).to_hsl().h, 60);
    }

    // ── Roundtrip Tests ──────────────────────────────────────────────────

    #[test]
    fn float_roundtrip_is_exact() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let c = Rgb::new(r, g, b);
                    let (h, s, l) = c.to_hsl_f64();
                    assert_eq!(Rgb::from_hsl_f64(h, s, l), c);
                }
            }
        }
    }

    #[test]
    fn integer_roundtrip_gray_within_one() {
        for v in 0..=255u8 {
            let c = Rgb::new(v, v, v);
            let back = c.to_hsl().to_rgb();
            assert!(back.is_achromatic());
            assert!(back.max_channel_diff(c) <= 1, "{c:?} -> {back:?}");
        }
    }

    #[test]
    fn integer_roundtrip_bounded_drift() {
        // Whole-degree hue and whole-percent s/l can move a saturated color
        // by a few units; the drift never exceeds five.
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(3) {
                for b in (0..=255u8).step_by(3) {
                    let c = Rgb::new(r, g, b);
                    let back = c.to_hsl().to_rgb();
                    assert!(back.max_channel_diff(c) <= 5, "{c:?} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn hsl_roundtrip_hue_within_one_degree() {
        for h in (0..360u16).step_by(7) {
            for s in [40u8, 60, 80, 100] {
                for l in [30u8, 50, 70] {
                    let back = Hsl::new(h, s, l).to_rgb().to_hsl();
                    let diff = back.h.abs_diff(h);
                    let diff = diff.min(360 - diff);
                    assert!(diff <= 1, "hsl({h},{s},{l}) came back with hue {}", back.h);
                }
            }
        }
    }

    // ── Normalization ────────────────────────────────────────────────────

    #[test]
    fn hsl_new_wraps_and_clamps() {
        assert_eq!(Hsl::new(360, 120, 101), Hsl { h: 0, s: 100, l: 100 });
        assert_eq!(Hsl::new(725, 50, 50).h, 5);
    }

    #[test]
    fn hsl_wrapping_handles_negatives() {
        assert_eq!(Hsl::wrapping(-10, -5, 150), Hsl { h: 350, s: 0, l: 100 });
        assert_eq!(Hsl::wrapping(-370, 50, 50).h, 350);
    }

    #[test]
    fn from_hsl_f64_tolerates_out_of_range() {
        assert_eq!(Rgb::from_hsl_f64(-120.0, 100.0, 50.0), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from_hsl_f64(480.0, 100.0, 50.0), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hsl_f64(0.0, 0.0, 140.0), Rgb::WHITE);
        assert_eq!(Rgb::from_hsl_f64(0.0, -20.0, 50.0), Rgb::new(128, 128, 128));
    }

    #[test]
    fn to_hsl_f64_ranges() {
        let (h, s, l) = Rgb::new(124, 58, 237).to_hsl_f64();
        assert!(approx_eq(h, 262.1, 0.1), "hue: {h}");
        assert!(approx_eq(s, 83.3, 0.1), "saturation: {s}");
        assert!(approx_eq(l, 57.8, 0.1), "lightness: {l}");
    }

    // ── Distance ─────────────────────────────────────────────────────────

    #[test]
    fn distance_is_squared_euclidean() {
        assert_eq!(Rgb::BLACK.distance_sq(Rgb::BLACK), 0);
        assert_eq!(Rgb::new(3, 4, 0).distance_sq(Rgb::BLACK), 25);
        assert_eq!(Rgb::BLACK.distance_sq(Rgb::WHITE), 3 * 255 * 255);
    }

    // ── Display / Serde ──────────────────────────────────────────────────

    #[test]
    fn display_is_canonical_hex() {
        assert_eq!(Rgb::new(15, 23, 42).to_string(), "#0F172A");
        assert_eq!(format!("{:?}", Rgb::new(1, 2, 3)), "Rgb(1, 2, 3)");
        assert_eq!(Hsl::new(262, 83, 58).to_string(), "hsl(262, 83%, 58%)");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Rgb::new(124, 58, 237)).unwrap();
        assert_eq!(json, "\"#7C3AED\"");
        let back: Rgb = serde_json::from_str("\"7c3aed\"").unwrap();
        assert_eq!(back, Rgb::new(124, 58, 237));
        assert!(serde_json::from_str::<Rgb>("\"#nothex\"").is_err());
    }
}
