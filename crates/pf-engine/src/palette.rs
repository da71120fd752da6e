//! Palette and lock-mask value types.
//!
//! A palette is exactly five colors. Slot order is meaningful to whoever
//! renders it (hero background, accent, buttons); the engine only cares that
//! slot `i` of the palette lines up with slot `i` of the lock mask.

use std::ops::Index;

use pf_color::{Hsl, Rgb};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Five positionally significant colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette([Rgb; PALETTE_SIZE]);

impl Palette {
    /// The palette a fresh session shows: violet, sky, green, amber and red.
    pub const DEFAULT: Self = Self([
        Rgb::new(0x7C, 0x3A, 0xED),
        Rgb::new(0x0E, 0xA5, 0xE9),
        Rgb::new(0x22, 0xC5, 0x5E),
        Rgb::new(0xF5, 0x9E, 0x0B),
        Rgb::new(0xEF, 0x44, 0x44),
    ]);

    #[must_use]
    pub const fn new(colors: [Rgb; PALETTE_SIZE]) -> Self {
        Self(colors)
    }

    /// Parse five hex strings.
    ///
    /// # Errors
    ///
    /// [`Error::PaletteSize`] unless exactly five strings are given,
    /// [`Error::Color`] for the first one that is not a hex color.
    pub fn from_hex<S: AsRef<str>>(hexes: &[S]) -> Result<Self, Error> {
        if hexes.len() != PALETTE_SIZE {
            return Err(Error::PaletteSize { found: hexes.len() });
        }
        let mut colors = [Rgb::BLACK; PALETTE_SIZE];
        for (slot, hex) in colors.iter_mut().zip(hexes) {
            *slot = Rgb::from_hex(hex.as_ref())?;
        }
        Ok(Self(colors))
    }

    #[must_use]
    pub const fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.0
    }

    /// The color in slot `index`.
    ///
    /// # Errors
    ///
    /// [`Error::Slot`] when `index >= PALETTE_SIZE`.
    pub fn get(&self, index: usize) -> Result<Rgb, Error> {
        self.0.get(index).copied().ok_or(Error::Slot { index })
    }

    /// Replace the color in slot `index`.
    ///
    /// # Errors
    ///
    /// [`Error::Slot`] when `index >= PALETTE_SIZE`.
    pub fn set(&mut self, index: usize, color: Rgb) -> Result<(), Error> {
        let slot = self.0.get_mut(index).ok_or(Error::Slot { index })?;
        *slot = color;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.0.iter().copied()
    }

    /// Canonical `#RRGGBB` strings, slot order.
    #[must_use]
    pub fn to_hex(&self) -> [String; PALETTE_SIZE] {
        self.0.map(Rgb::to_hex)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Index<usize> for Palette {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.0[index]
    }
}

impl From<[Rgb; PALETTE_SIZE]> for Palette {
    fn from(colors: [Rgb; PALETTE_SIZE]) -> Self {
        Self(colors)
    }
}

// ---------------------------------------------------------------------------
// LockMask
// ---------------------------------------------------------------------------

/// Per-slot "do not touch" flags. `true` keeps the slot's color through
/// generation and adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockMask([bool; PALETTE_SIZE]);

impl LockMask {
    /// Nothing locked.
    pub const NONE: Self = Self([false; PALETTE_SIZE]);

    /// Everything locked.
    pub const ALL: Self = Self([true; PALETTE_SIZE]);

    #[must_use]
    pub const fn new(locks: [bool; PALETTE_SIZE]) -> Self {
        Self(locks)
    }

    /// Lock exactly the listed slots.
    ///
    /// # Errors
    ///
    /// [`Error::Slot`] for the first index outside the palette.
    pub fn from_slots(slots: &[usize]) -> Result<Self, Error> {
        let mut mask = Self::NONE;
        for &index in slots {
            mask.set(index, true)?;
        }
        Ok(mask)
    }

    /// Whether slot `index` is locked. Out-of-range slots read as unlocked.
    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Set the lock on slot `index`.
    ///
    /// # Errors
    ///
    /// [`Error::Slot`] when `index >= PALETTE_SIZE`.
    pub fn set(&mut self, index: usize, locked: bool) -> Result<(), Error> {
        let slot = self.0.get_mut(index).ok_or(Error::Slot { index })?;
        *slot = locked;
        Ok(())
    }

    /// Flip the lock on slot `index` and return the new state.
    ///
    /// # Errors
    ///
    /// [`Error::Slot`] when `index >= PALETTE_SIZE`.
    pub fn toggle(&mut self, index: usize) -> Result<bool, Error> {
        let slot = self.0.get_mut(index).ok_or(Error::Slot { index })?;
        *slot = !*slot;
        Ok(*slot)
    }

    #[must_use]
    pub const fn flags(&self) -> &[bool; PALETTE_SIZE] {
        &self.0
    }

    /// Number of locked slots.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&locked| locked).count()
    }
}

// ---------------------------------------------------------------------------
// Per-color helpers
// ---------------------------------------------------------------------------

/// Number of steps in a shade ramp.
pub const SHADE_STEPS: usize = 9;

/// A lightness ramp for one color: same hue and saturation, lightness
/// 10%, 20%, … 90%.
#[must_use]
pub fn shades(color: Rgb) -> [Rgb; SHADE_STEPS] {
    let base = color.to_hsl();
    std::array::from_fn(|i| {
        let l = (10 + i as i32 * 10).clamp(5, 95);
        Hsl::wrapping(i32::from(base.h), i32::from(base.s), l).to_rgb()
    })
}

/// One-line numeric description: `RGB r,g,b • HSL h,s%,l%`.
#[must_use]
pub fn describe(color: Rgb) -> String {
    let Hsl { h, s, l } = color.to_hsl();
    format!("RGB {},{},{} • HSL {h},{s}%,{l}%", color.r, color.g, color.b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_palette_hex() {
        assert_eq!(
            Palette::DEFAULT.to_hex(),
            ["#7C3AED", "#0EA5E9", "#22C55E", "#F59E0B", "#EF4444"]
        );
    }

    #[test]
    fn from_hex_requires_five() {
        let err = Palette::from_hex(&["#000000"; 4]).unwrap_err();
        assert!(matches!(err, Error::PaletteSize { found: 4 }));
    }

    #[test]
    fn from_hex_reports_bad_color() {
        let err = Palette::from_hex(&["000000", "111111", "nope", "333333", "444444"]).unwrap_err();
        assert!(matches!(err, Error::Color(_)));
    }

    #[test]
    fn get_and_set_check_bounds() {
        let mut p = Palette::DEFAULT;
        assert!(matches!(p.get(5), Err(Error::Slot { index: 5 })));
        p.set(4, Rgb::WHITE).unwrap();
        assert_eq!(p[4], Rgb::WHITE);
        assert!(p.set(9, Rgb::WHITE).is_err());
    }

    #[test]
    fn palette_serializes_as_hex_array() {
        let json = serde_json::to_string(&Palette::DEFAULT).unwrap();
        assert_eq!(
            json,
            r##"["#7C3AED","#0EA5E9","#22C55E","#F59E0B","#EF4444"]"##
        );
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Palette::DEFAULT);
    }

    #[test]
    fn lock_mask_from_slots() {
        let mask = LockMask::from_slots(&[0, 3]).unwrap();
        assert_eq!(mask.flags(), &[true, false, false, true, false]);
        assert_eq!(mask.count(), 2);
        assert!(LockMask::from_slots(&[5]).is_err());
    }

    #[test]
    fn lock_mask_toggle() {
        let mut mask = LockMask::NONE;
        assert!(mask.toggle(2).unwrap());
        assert!(mask.is_locked(2));
        assert!(!mask.toggle(2).unwrap());
        assert!(!mask.is_locked(2));
        assert!(!mask.is_locked(17));
    }

    #[test]
    fn shades_keep_hue_and_ramp_lightness() {
        let base = Rgb::new(0x7C, 0x3A, 0xED);
        let ramp = shades(base);
        assert_eq!(ramp.len(), SHADE_STEPS);
        let lightness: Vec<u8> = ramp.iter().map(|c| c.to_hsl().l).collect();
        for pair in lightness.windows(2) {
            assert!(pair[0] < pair[1], "ramp not increasing: {lightness:?}");
        }
        for c in &ramp {
            let hue = c.to_hsl().h;
            assert!(hue.abs_diff(262) <= 2, "hue drifted to {hue}");
        }
    }

    #[test]
    fn shades_of_gray_are_gray() {
        for c in shades(Rgb::new(128, 128, 128)) {
            assert!(c.is_achromatic());
        }
    }

    #[test]
    fn describe_matches_format() {
        assert_eq!(
            describe(Rgb::new(124, 58, 237)),
            "RGB 124,58,237 • HSL 262,83%,58%"
        );
    }
}
