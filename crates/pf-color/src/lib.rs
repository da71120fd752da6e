// SPDX-License-Identifier: MIT
//
// pf-color — color space foundation for palette-forge.
//
// Everything above this crate speaks two color models: packed 8-bit sRGB
// (what gets stored, shared and rendered) and integer HSL (what humans and
// the palette rules reason in). This crate owns the conversions between
// them and the canonical `#RRGGBB` text form.
//
// All functions are pure and total over their input domains. The only
// fallible entry point is hex parsing, which reports a `FormatError`.

// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
// Rounded, clamped floats are narrowed back into u8/u16 channels.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod color;
pub mod hex;

pub use color::{Hsl, Rgb};
pub use hex::FormatError;
