//! # pf-engine — palette generation, adjustment and accessibility metrics
//!
//! Produces five-color palettes from one of four strategies, merges them
//! with a lock mask, applies a uniform perceptual adjustment and scores the
//! result for readability. Every operation is a pure function of its
//! arguments plus an injected [`RandomSource`].
//!
//! # Architecture
//!
//! ```text
//! GenerationMode (Seed > Harmony > Mood > Random)
//!     │
//!     ▼
//! generate.rs: five base colors (harmony.rs / mood.rs rule tables)
//!     │
//!     ▼
//! engine.rs:   lock-mask merge, then adjust.rs on unlocked slots
//!     │
//!     ▼
//! Palette ──► metrics.rs: luminance, contrast, readable text
//!         ──► names.rs:   nearest named color
//!         ──► export.rs:  CSS / Tailwind / JSON / SCSS / share code
//! ```
//!
//! [`Session`] threads palette, locks, mode, adjustment, history and
//! favorites through the engine for callers that keep state between calls.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Small integer-to-float casts (slot indices, channel sums).
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod adjust;
pub mod builtin;
pub mod engine;
pub mod error;
pub mod export;
pub mod generate;
pub mod harmony;
pub mod metrics;
pub mod mood;
pub mod names;
pub mod palette;
pub mod random;
pub mod session;

pub use adjust::{AdjustmentVector, adjust};
pub use builtin::{TRENDING, trending, trending_names};
pub use engine::{GenerationMode, PaletteEngine, apply_adjustments};
pub use error::Error;
pub use export::{ExportFormat, export, extract_colors, from_share_code, palette_from_text, to_share_code};
pub use harmony::HarmonyKind;
pub use metrics::{
    ContrastReport, PairReport, accessibility_report, contrast_ratio, readable_text_color,
    relative_luminance,
};
pub use mood::MoodKind;
pub use names::nearest_named_color;
pub use palette::{LockMask, PALETTE_SIZE, Palette, describe, shades};
pub use random::{RandomSource, SystemRandom, Xorshift32};
pub use session::{Favorite, Session};

pub use pf_color::{FormatError, Hsl, Rgb};
