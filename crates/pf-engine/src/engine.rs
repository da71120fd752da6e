//! Palette engine: mode selection, lock merge, adjustment.
//!
//! The engine holds nothing but its random source. Palette, locks, mode and
//! adjustment are passed in on every call and a new palette comes back; the
//! caller owns all state (see [`crate::session::Session`] for one such
//! owner).

use pf_color::Rgb;
use serde::{Deserialize, Serialize};

use crate::adjust::{AdjustmentVector, adjust};
use crate::generate;
use crate::harmony::HarmonyKind;
use crate::mood::MoodKind;
use crate::palette::{LockMask, Palette};
use crate::random::{RandomSource, SystemRandom};

// ---------------------------------------------------------------------------
// GenerationMode
// ---------------------------------------------------------------------------

/// Which generator fills the unlocked slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum GenerationMode {
    /// Five uniform random colors.
    #[default]
    Random,
    /// Slot 0 fixed to the color, the rest random.
    Seed(Rgb),
    Mood(MoodKind),
    Harmony(HarmonyKind),
}

impl GenerationMode {
    /// Pick a mode from independently set inputs.
    ///
    /// Precedence is Seed, then Harmony, then Mood, then Random. Empty or
    /// whitespace-only names count as unset. A mood of `"random"` or one
    /// that is not recognized gives [`GenerationMode::Random`]; an
    /// unrecognized harmony still selects harmony mode with evenly spaced
    /// hues.
    #[must_use]
    pub fn resolve(seed: Option<Rgb>, harmony: Option<&str>, mood: Option<&str>) -> Self {
        fn set(s: Option<&str>) -> Option<&str> {
            s.map(str::trim).filter(|s| !s.is_empty())
        }

        let mode = if let Some(color) = seed {
            Self::Seed(color)
        } else if let Some(name) = set(harmony) {
            Self::Harmony(HarmonyKind::from_name(name))
        } else if let Some(name) = set(mood) {
            MoodKind::from_name(name).map_or(Self::Random, Self::Mood)
        } else {
            Self::Random
        };
        log::debug!("resolved generation mode: {mode}");
        mode
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::Seed(color) => write!(f, "seed {color}"),
            Self::Mood(mood) => write!(f, "mood {}", mood.name()),
            Self::Harmony(kind) => write!(f, "harmony {}", kind.name()),
        }
    }
}

// ---------------------------------------------------------------------------
// PaletteEngine
// ---------------------------------------------------------------------------

/// Palette generator over an injected random source.
#[derive(Debug, Clone)]
pub struct PaletteEngine<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> PaletteEngine<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Run the generator selected by `mode`, ignoring locks.
    pub fn base_palette(&mut self, mode: &GenerationMode) -> Palette {
        match *mode {
            GenerationMode::Random => generate::random_palette(&mut self.rng),
            GenerationMode::Seed(color) => generate::seeded_palette(color, &mut self.rng),
            GenerationMode::Mood(mood) => generate::mood_palette(mood, &mut self.rng),
            GenerationMode::Harmony(kind) => generate::harmony_palette(kind, &mut self.rng),
        }
    }

    /// Produce the next palette.
    ///
    /// Locked slots carry over from `current` untouched. Every other slot
    /// takes the generator's color with `adjustment` applied; a zero vector
    /// leaves the generated colors exactly as drawn.
    pub fn generate(
        &mut self,
        current: &Palette,
        locks: &LockMask,
        mode: &GenerationMode,
        adjustment: AdjustmentVector,
    ) -> Palette {
        let base = self.base_palette(mode);
        log::trace!("{mode} base palette {:?}, {} slot(s) locked", base.to_hex(), locks.count());

        let merged = std::array::from_fn(|i| {
            if locks.is_locked(i) {
                current[i]
            } else if adjustment.is_zero() {
                base[i]
            } else {
                adjust(base[i], adjustment)
            }
        });
        Palette::new(merged)
    }
}

impl PaletteEngine<SystemRandom> {
    /// An engine drawing from the thread-local system generator.
    #[must_use]
    pub fn with_system_random() -> Self {
        Self::new(SystemRandom::new())
    }
}

impl Default for PaletteEngine<SystemRandom> {
    fn default() -> Self {
        Self::with_system_random()
    }
}

/// Re-apply `vector` to every unlocked slot of an existing palette.
///
/// This is the slider path: no new colors are drawn. A zero vector returns
/// the palette unchanged.
#[must_use]
pub fn apply_adjustments(palette: &Palette, locks: &LockMask, vector: AdjustmentVector) -> Palette {
    if vector.is_zero() {
        return *palette;
    }
    Palette::new(std::array::from_fn(|i| {
        if locks.is_locked(i) {
            palette[i]
        } else {
            adjust(palette[i], vector)
        }
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Xorshift32;
    use pretty_assertions::assert_eq;

    const SEED: Rgb = Rgb::new(0x12, 0x34, 0x56);

    fn engine(seed: u32) -> PaletteEngine<Xorshift32> {
        PaletteEngine::new(Xorshift32::new(seed))
    }

    fn all_modes() -> Vec<GenerationMode> {
        let mut modes = vec![GenerationMode::Random, GenerationMode::Seed(SEED)];
        modes.extend(MoodKind::all().iter().copied().map(GenerationMode::Mood));
        modes.extend(HarmonyKind::all().iter().copied().map(GenerationMode::Harmony));
        modes
    }

    // ── Resolution ──────────────────────────────────────────────────

    #[test]
    fn resolve_precedence() {
        let r = GenerationMode::resolve;
        assert_eq!(r(Some(SEED), Some("triadic"), Some("calm")), GenerationMode::Seed(SEED));
        assert_eq!(
            r(None, Some("triadic"), Some("calm")),
            GenerationMode::Harmony(HarmonyKind::Triadic)
        );
        assert_eq!(r(None, None, Some("calm")), GenerationMode::Mood(MoodKind::Calm));
        assert_eq!(r(None, None, None), GenerationMode::Random);
    }

    #[test]
    fn resolve_empty_names_are_unset() {
        assert_eq!(
            GenerationMode::resolve(None, Some(""), Some("vintage")),
            GenerationMode::Mood(MoodKind::Vintage)
        );
        assert_eq!(GenerationMode::resolve(None, Some("  "), Some("")), GenerationMode::Random);
    }

    #[test]
    fn resolve_unknown_names() {
        assert_eq!(GenerationMode::resolve(None, None, Some("random")), GenerationMode::Random);
        assert_eq!(GenerationMode::resolve(None, None, Some("moody")), GenerationMode::Random);
        assert_eq!(
            GenerationMode::resolve(None, Some("hexadic"), Some("calm")),
            GenerationMode::Harmony(HarmonyKind::Pentadic)
        );
    }

    #[test]
    fn mode_serde_and_display() {
        let json = serde_json::to_string(&GenerationMode::Seed(SEED)).unwrap();
        assert_eq!(json, r##"{"kind":"seed","value":"#123456"}"##);
        let back: GenerationMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GenerationMode::Seed(SEED));
        assert_eq!(
            serde_json::to_string(&GenerationMode::Random).unwrap(),
            r#"{"kind":"random"}"#
        );
        assert_eq!(GenerationMode::Mood(MoodKind::Calm).to_string(), "mood calm");
    }

    // ── Generation ──────────────────────────────────────────────────

    #[test]
    fn all_locked_returns_input_unchanged() {
        let mut e = engine(3);
        let adjustment = AdjustmentVector::new(40.0, -30.0, 25.0);
        for mode in all_modes() {
            let out = e.generate(&Palette::DEFAULT, &LockMask::ALL, &mode, adjustment);
            assert_eq!(out, Palette::DEFAULT, "{mode}");
        }
    }

    #[test]
    fn output_is_five_uppercase_hex() {
        let mut e = engine(11);
        for mode in all_modes() {
            for _ in 0..50 {
                let out = e.generate(&Palette::DEFAULT, &LockMask::NONE, &mode, AdjustmentVector::ZERO);
                for hex in out.to_hex() {
                    assert_eq!(hex.len(), 7);
                    assert!(hex.starts_with('#'));
                    assert!(hex[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
                }
            }
        }
    }

    #[test]
    fn locked_slots_carry_over() {
        let mut e = engine(5);
        let locks = LockMask::from_slots(&[1, 3]).unwrap();
        let out = e.generate(&Palette::DEFAULT, &locks, &GenerationMode::Random, AdjustmentVector::ZERO);
        assert_eq!(out[1], Palette::DEFAULT[1]);
        assert_eq!(out[3], Palette::DEFAULT[3]);
        assert_ne!(out[0], Palette::DEFAULT[0]);
    }

    #[test]
    fn unlocked_slots_take_adjusted_base() {
        let vector = AdjustmentVector::new(-25.0, 10.0, 5.0);
        let locks = LockMask::from_slots(&[2]).unwrap();
        let mode = GenerationMode::Harmony(HarmonyKind::Analogous);

        let base = engine(99).base_palette(&mode);
        let out = engine(99).generate(&Palette::DEFAULT, &locks, &mode, vector);
        for i in 0..5 {
            let expected = if i == 2 { Palette::DEFAULT[2] } else { adjust(base[i], vector) };
            assert_eq!(out[i], expected, "slot {i}");
        }
    }

    #[test]
    fn seed_mode_pins_slot_zero_without_adjustment() {
        let out = engine(1).generate(
            &Palette::DEFAULT,
            &LockMask::NONE,
            &GenerationMode::Seed(SEED),
            AdjustmentVector::ZERO,
        );
        assert_eq!(out[0], SEED);
    }

    #[test]
    fn same_seed_same_palette() {
        let mode = GenerationMode::Mood(MoodKind::Playful);
        let a = engine(7).generate(&Palette::DEFAULT, &LockMask::NONE, &mode, AdjustmentVector::ZERO);
        let b = engine(7).generate(&Palette::DEFAULT, &LockMask::NONE, &mode, AdjustmentVector::ZERO);
        assert_eq!(a, b);
    }

    // ── Live Adjustment ─────────────────────────────────────────────

    #[test]
    fn apply_adjustments_skips_locked() {
        let locks = LockMask::from_slots(&[0]).unwrap();
        // +200 units lifts any lightness to 100.
        let vector = AdjustmentVector::new(0.0, 0.0, 200.0);
        let out = apply_adjustments(&Palette::DEFAULT, &locks, vector);
        assert_eq!(out[0], Palette::DEFAULT[0]);
        for i in 1..5 {
            assert_eq!(out[i], Rgb::WHITE);
        }
    }

    #[test]
    fn apply_adjustments_half_lightness_step() {
        // #0EA5E9 is hsl(199, 89%, 48%): +100 units adds 50 points, short of white.
        let vector = AdjustmentVector::new(0.0, 0.0, 100.0);
        let out = apply_adjustments(&Palette::DEFAULT, &LockMask::NONE, vector);
        assert_eq!(out[1].to_hex(), "#F5FCFE");
        assert_ne!(out[1], Rgb::WHITE);
    }

    #[test]
    fn zero_adjustment_keeps_generated_colors_exact() {
        let mode = GenerationMode::Harmony(HarmonyKind::Triadic);
        let base = engine(21).base_palette(&mode);
        let out =
            engine(21).generate(&Palette::DEFAULT, &LockMask::NONE, &mode, AdjustmentVector::ZERO);
        assert_eq!(out, base);
    }

    #[test]
    fn apply_zero_adjustment_is_identity() {
        let out = apply_adjustments(&Palette::DEFAULT, &LockMask::NONE, AdjustmentVector::ZERO);
        assert_eq!(out, Palette::DEFAULT);
    }
}
