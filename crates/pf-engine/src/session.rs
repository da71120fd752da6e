//! Session state: the palette a user is working on plus everything around
//! it: locks, mode, slider values, recent history and named favorites.
//!
//! The engine itself is stateless; a `Session` is one way for a front end
//! to own the state and thread it through. It borrows the engine only for
//! the duration of [`Session::regenerate`].

use serde::{Deserialize, Serialize};

use crate::adjust::AdjustmentVector;
use crate::engine::{GenerationMode, PaletteEngine, apply_adjustments};
use crate::error::Error;
use crate::palette::{LockMask, Palette};
use crate::random::RandomSource;

/// Most recent palettes kept in history.
pub const HISTORY_LIMIT: usize = 10;

/// Most named favorites kept.
pub const FAVORITES_LIMIT: usize = 50;

/// A palette saved under a user-chosen name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub name: String,
    pub palette: Palette,
}

/// Everything a front end needs to persist between runs.
///
/// Adjustment is absolute: the shown palette is always the last generated
/// or applied palette with the current vector applied to its unlocked
/// slots, so moving a slider back to zero restores the original colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    palette: Palette,
    /// `palette` before the adjustment vector was applied.
    base: Palette,
    locks: LockMask,
    mode: GenerationMode,
    adjustment: AdjustmentVector,
    /// Most recent first.
    history: Vec<Palette>,
    /// Most recent first.
    favorites: Vec<Favorite>,
}

impl Session {
    /// A session showing `palette`, nothing locked, random mode, no
    /// adjustment. History starts with `palette` as its only entry.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            base: palette,
            locks: LockMask::NONE,
            mode: GenerationMode::Random,
            adjustment: AdjustmentVector::ZERO,
            history: vec![palette],
            favorites: Vec::new(),
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub const fn locks(&self) -> &LockMask {
        &self.locks
    }

    #[must_use]
    pub const fn mode(&self) -> &GenerationMode {
        &self.mode
    }

    #[must_use]
    pub const fn adjustment(&self) -> AdjustmentVector {
        self.adjustment
    }

    #[must_use]
    pub fn history(&self) -> &[Palette] {
        &self.history
    }

    #[must_use]
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    // ── Transitions ─────────────────────────────────────────────────

    pub fn set_mode(&mut self, mode: GenerationMode) {
        self.mode = mode;
    }

    pub fn set_locks(&mut self, locks: LockMask) {
        self.locks = locks;
    }

    /// Flip the lock on slot `index` and return the new state.
    ///
    /// # Errors
    ///
    /// [`Error::Slot`] when `index` is outside the palette.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool, Error> {
        self.locks.toggle(index)
    }

    /// Generate a new palette with the session's mode, locks and
    /// adjustment, and record it in history.
    pub fn regenerate<R: RandomSource>(&mut self, engine: &mut PaletteEngine<R>) -> &Palette {
        // Locked slots keep their unadjusted base so a later unlock does not
        // adjust them twice.
        self.base = engine.generate(&self.base, &self.locks, &self.mode, AdjustmentVector::ZERO);
        self.show_adjusted();
        self.push_history(self.palette);
        &self.palette
    }

    /// Replace the slider values and recolor the unlocked slots.
    pub fn set_adjustment(&mut self, adjustment: AdjustmentVector) -> &Palette {
        self.adjustment = adjustment;
        self.show_adjusted();
        &self.palette
    }

    /// Show `palette` (from history, favorites or a preset) and clear every
    /// lock. History is left alone.
    pub fn apply(&mut self, palette: Palette) {
        self.palette = palette;
        self.base = palette;
        self.locks = LockMask::NONE;
    }

    /// Save the current palette under `name`, kept verbatim. An empty name
    /// is ignored and returns `false`.
    pub fn save_favorite(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.favorites.insert(
            0,
            Favorite {
                name: name.to_string(),
                palette: self.palette,
            },
        );
        if self.favorites.len() > FAVORITES_LIMIT {
            log::debug!("favorites over {FAVORITES_LIMIT}, dropping the oldest");
            self.favorites.truncate(FAVORITES_LIMIT);
        }
        true
    }

    /// Unlocked slots show the base with the current vector applied. Locked
    /// slots keep what is shown, which may differ from the base.
    fn show_adjusted(&mut self) {
        let adjusted = apply_adjustments(&self.base, &self.locks, self.adjustment);
        self.palette = Palette::new(std::array::from_fn(|i| {
            if self.locks.is_locked(i) { self.palette[i] } else { adjusted[i] }
        }));
    }

    fn push_history(&mut self, palette: Palette) {
        self.history.insert(0, palette);
        if self.history.len() > HISTORY_LIMIT {
            log::trace!("history over {HISTORY_LIMIT}, dropping the oldest");
            self.history.truncate(HISTORY_LIMIT);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Palette::DEFAULT)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
