// SPDX-License-Identifier: MIT
//
// ANSI SGR sequences for palette swatches.
//
// Only the handful of codes a swatch needs: 24-bit foreground and
// background, bold, and reset. Everything writes to any `impl Write` and
// makes no decision about whether color is wanted; callers check that.

use std::io::{self, Write};

use pf_engine::Rgb;

/// Reset all SGR attributes (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Bold text (SGR 1).
#[inline]
pub fn bold(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[1m")
}

/// 24-bit foreground color.
#[inline]
pub fn fg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    let (r, g, b) = color.channels();
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// 24-bit background color.
#[inline]
pub fn bg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    let (r, g, b) = color.channels();
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// `text` on a `background` swatch, in `foreground`, then reset.
pub fn painted(w: &mut impl Write, background: Rgb, foreground: Rgb, text: &str) -> io::Result<()> {
    bg(w, background)?;
    fg(w, foreground)?;
    w.write_all(text.as_bytes())?;
    reset(w)
}
