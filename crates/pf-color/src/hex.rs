// SPDX-License-Identifier: MIT
//
// Hex codec for 8-bit RGB colors.
//
// The canonical text form is `#RRGGBB`: a leading `#`, then exactly six
// uppercase hex digits, two per channel, zero-padded. Parsing is lenient
// about the `#` and about letter case, strict about everything else.

use thiserror::Error;

use crate::color::Rgb;

/// Why a string was rejected as a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The digit count (after an optional `#`) was not six.
    #[error("expected 6 hex digits, found {len}")]
    Length { len: usize },

    /// A character outside `0-9`, `a-f`, `A-F` was found.
    #[error("invalid hex digit {ch:?} at position {index}")]
    Digit { ch: char, index: usize },
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse `#RRGGBB` or `RRGGBB` (any letter case) into an [`Rgb`].
///
/// # Errors
///
/// Returns [`FormatError::Length`] when the string does not hold exactly six
/// characters after the optional `#`, and [`FormatError::Digit`] for the
/// first character that is not a hex digit.
pub fn parse_hex(s: &str) -> Result<Rgb, FormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);

    let len = digits.chars().count();
    if len != 6 {
        return Err(FormatError::Length { len });
    }

    let mut nibbles = [0u8; 6];
    for (index, ch) in digits.chars().enumerate() {
        let value = ch.to_digit(16).ok_or(FormatError::Digit { ch, index })?;
        nibbles[index] = value as u8;
    }

    let [r1, r0, g1, g0, b1, b0] = nibbles;
    Ok(Rgb::new((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0))
}

// ─── Formatting ──────────────────────────────────────────────────────────────

/// Format an [`Rgb`] as `#RRGGBB` (uppercase, zero-padded).
#[must_use]
pub fn format_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Format an [`Rgb`] as six uppercase hex digits without the `#`.
#[must_use]
pub fn format_hex_bare(rgb: Rgb) -> String {
    format!("{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
