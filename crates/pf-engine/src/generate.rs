//! Base-palette generators.
//!
//! Each strategy fills all five slots; the engine decides afterwards which
//! of them survive the lock mask. Mood and harmony work in integer HSL and
//! expose that stage (`*_hsl`) so their rules can be checked before the
//! lossy trip to RGB.

use pf_color::{Hsl, Rgb};

use crate::harmony::HarmonyKind;
use crate::mood::MoodKind;
use crate::palette::{PALETTE_SIZE, Palette};
use crate::random::RandomSource;

/// Saturation range shared by every harmony palette, percent.
pub const HARMONY_SATURATION: (i32, i32) = (40, 80);

/// Lightness range shared by every harmony palette, percent.
pub const HARMONY_LIGHTNESS: (i32, i32) = (40, 65);

/// Lightness step between neighboring slots of a mono ramp.
pub const MONO_STEP: i32 = 8;

/// Bounds a mono ramp is clamped into.
pub const MONO_LIGHTNESS: (i32, i32) = (25, 80);

// ---------------------------------------------------------------------------
// Random / Seed
// ---------------------------------------------------------------------------

/// One color, each channel uniform over 0..=255.
pub fn random_color(rng: &mut impl RandomSource) -> Rgb {
    let r = rng.channel();
    let g = rng.channel();
    let b = rng.channel();
    Rgb::new(r, g, b)
}

/// Five independent random colors.
pub fn random_palette(rng: &mut impl RandomSource) -> Palette {
    Palette::new(std::array::from_fn(|_| random_color(rng)))
}

/// `seed` in slot 0, four random colors after it.
pub fn seeded_palette(seed: Rgb, rng: &mut impl RandomSource) -> Palette {
    Palette::new(std::array::from_fn(|i| {
        if i == 0 { seed } else { random_color(rng) }
    }))
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Five colors with free hue and mood-bounded saturation and lightness.
pub fn mood_hsl(mood: MoodKind, rng: &mut impl RandomSource) -> [Hsl; PALETTE_SIZE] {
    let (s_lo, s_hi) = mood.saturation_range();
    let (l_lo, l_hi) = mood.lightness_range();
    std::array::from_fn(|_| {
        let h = rng.range(0, 359);
        let s = rng.range(s_lo, s_hi);
        let l = rng.range(l_lo, l_hi);
        Hsl::wrapping(h, s, l)
    })
}

pub fn mood_palette(mood: MoodKind, rng: &mut impl RandomSource) -> Palette {
    Palette::new(mood_hsl(mood, rng).map(Hsl::to_rgb))
}

// ---------------------------------------------------------------------------
// Harmony
// ---------------------------------------------------------------------------

/// One random base hue, saturation and lightness, spread across the slots
/// by the kind's offset table.
///
/// For [`HarmonyKind::Mono`] the hue stays put and lightness steps by
/// [`MONO_STEP`] per slot around the base, clamped into [`MONO_LIGHTNESS`].
pub fn harmony_hsl(kind: HarmonyKind, rng: &mut impl RandomSource) -> [Hsl; PALETTE_SIZE] {
    let base_hue = rng.range(0, 359);
    let s = rng.range(HARMONY_SATURATION.0, HARMONY_SATURATION.1);
    let l = rng.range(HARMONY_LIGHTNESS.0, HARMONY_LIGHTNESS.1);
    let offsets = kind.offsets();

    std::array::from_fn(|i| {
        let slot_l = if kind.is_mono() {
            (l + (i as i32 - 2) * MONO_STEP).clamp(MONO_LIGHTNESS.0, MONO_LIGHTNESS.1)
        } else {
            l
        };
        Hsl::wrapping(base_hue + offsets[i], s, slot_l)
    })
}

pub fn harmony_palette(kind: HarmonyKind, rng: &mut impl RandomSource) -> Palette {
    Palette::new(harmony_hsl(kind, rng).map(Hsl::to_rgb))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
