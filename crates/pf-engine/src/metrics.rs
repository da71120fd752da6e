//! Readability metrics: WCAG contrast and a fast text-color heuristic.
//!
//! Two independent answers to "can I read text on this?":
//!
//! - [`contrast_ratio`] follows the WCAG 2.x relative-luminance definition
//!   and backs the accessibility report (AA at 4.5:1, AAA at 7:1).
//! - [`readable_text_color`] is the cheap YIQ brightness split used for live
//!   swatch labels. It does not consult luminance and the two can disagree
//!   near their thresholds.

use pf_color::Rgb;
use serde::{Deserialize, Serialize};

use crate::palette::{PALETTE_SIZE, Palette};

/// Minimum ratio for WCAG AA normal text.
pub const AA_RATIO: f64 = 4.5;

/// Minimum ratio for WCAG AAA normal text.
pub const AAA_RATIO: f64 = 7.0;

/// Text color chosen for bright backgrounds (slate-900).
pub const DARK_TEXT: Rgb = Rgb::new(0x0F, 0x17, 0x2A);

/// Text color chosen for dark backgrounds.
pub const LIGHT_TEXT: Rgb = Rgb::WHITE;

/// YIQ brightness at or above which dark text is used.
pub const YIQ_THRESHOLD: f64 = 140.0;

// ---------------------------------------------------------------------------
// Luminance and contrast
// ---------------------------------------------------------------------------

/// Linearize one 8-bit sRGB channel with the WCAG 2.x transfer function.
#[inline]
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r_lin = linearize(color.r);
    let g_lin = linearize(color.g);
    let b_lin = linearize(color.b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// WCAG contrast ratio between two colors, in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// YIQ brightness `(299 R + 587 G + 114 B) / 1000`, in [0, 255].
#[must_use]
pub fn yiq_brightness(color: Rgb) -> f64 {
    let sum = 299 * u32::from(color.r) + 587 * u32::from(color.g) + 114 * u32::from(color.b);
    f64::from(sum) / 1000.0
}

/// Near-black on bright backgrounds, white on dark ones.
#[must_use]
pub fn readable_text_color(background: Rgb) -> Rgb {
    if yiq_brightness(background) >= YIQ_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Contrast of one color pair against the WCAG normal-text thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    pub ratio: f64,
    /// `ratio >= 4.5`
    pub aa: bool,
    /// `ratio >= 7.0`
    pub aaa: bool,
}

impl ContrastReport {
    #[must_use]
    pub fn new(a: Rgb, b: Rgb) -> Self {
        let ratio = contrast_ratio(a, b);
        Self {
            ratio,
            aa: ratio >= AA_RATIO,
            aaa: ratio >= AAA_RATIO,
        }
    }
}

/// One row of a palette's accessibility report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairReport {
    /// Slot of the first color (always `< second`).
    pub first: usize,
    pub second: usize,
    pub a: Rgb,
    pub b: Rgb,
    pub contrast: ContrastReport,
}

/// Number of unordered slot pairs in a palette: C(5, 2).
pub const PAIR_COUNT: usize = PALETTE_SIZE * (PALETTE_SIZE - 1) / 2;

/// Contrast for every unordered pair of slots, `(0,1), (0,2), … (3,4)`.
#[must_use]
pub fn accessibility_report(palette: &Palette) -> Vec<PairReport> {
    let mut rows = Vec::with_capacity(PAIR_COUNT);
    for first in 0..PALETTE_SIZE {
        for second in first + 1..PALETTE_SIZE {
            let (a, b) = (palette[first], palette[second]);
            rows.push(PairReport {
                first,
                second,
                a,
                b,
                contrast: ContrastReport::new(a, b),
            });
        }
    }
    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
