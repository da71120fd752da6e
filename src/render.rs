// SPDX-License-Identifier: MIT
//
// Terminal presentation of palettes, colors and contrast reports.
//
// A `Renderer` writes to any `impl Write` so tests can capture output in a
// Vec. With color off, every view degrades to plain text with the same
// layout.

use std::io::{self, Write};

use pf_engine::{
    ContrastReport, LockMask, Palette, PairReport, Rgb, describe, nearest_named_color,
    readable_text_color, shades, to_share_code,
};

use crate::ansi;

/// Width of one swatch cell, padding included. Wide enough for the longest
/// color name plus a space on each side.
const CELL: usize = 15;

pub struct Renderer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Renderer<W> {
    pub const fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    // ── Building blocks ─────────────────────────────────────────────

    /// One centered cell showing `label` on `color`.
    fn cell(&mut self, color: Rgb, label: &str) -> io::Result<()> {
        let text = format!("{label:^CELL$}");
        if self.color {
            ansi::painted(&mut self.out, color, readable_text_color(color), &text)
        } else {
            self.out.write_all(text.as_bytes())
        }
    }

    fn heading(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            ansi::bold(&mut self.out)?;
            self.out.write_all(text.as_bytes())?;
            ansi::reset(&mut self.out)?;
            writeln!(self.out)
        } else {
            writeln!(self.out, "{text}")
        }
    }

    // ── Views ───────────────────────────────────────────────────────

    /// Swatch row, then a row of names. Locked slots are marked with `*`.
    pub fn palette(&mut self, palette: &Palette, locks: &LockMask) -> io::Result<()> {
        for (i, c) in palette.iter().enumerate() {
            let mark = if locks.is_locked(i) { "*" } else { "" };
            self.cell(c, &format!("{c}{mark}"))?;
        }
        writeln!(self.out)?;
        for c in palette.iter() {
            write!(self.out, "{:^CELL$}", nearest_named_color(c))?;
        }
        writeln!(self.out)
    }

    /// One `#RRGGBB` per line.
    pub fn hex_lines(&mut self, palette: &Palette) -> io::Result<()> {
        for c in palette.iter() {
            writeln!(self.out, "{c}")?;
        }
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// A single color as a swatch followed by its hex.
    pub fn color(&mut self, color: Rgb) -> io::Result<()> {
        self.cell(color, "")?;
        writeln!(self.out, " {color}")
    }

    /// Everything known about one color.
    pub fn inspect(&mut self, color: Rgb) -> io::Result<()> {
        self.cell(color, &color.to_string())?;
        writeln!(self.out, " {}", nearest_named_color(color))?;
        writeln!(self.out, "{}", describe(color))?;
        writeln!(self.out, "text on it: {}", readable_text_color(color))?;
        self.heading("shades")?;
        for shade in shades(color) {
            self.cell(shade, &shade.to_string())?;
        }
        writeln!(self.out)
    }

    pub fn contrast(&mut self, a: Rgb, b: Rgb, report: &ContrastReport) -> io::Result<()> {
        if self.color {
            ansi::painted(&mut self.out, a, b, &format!(" {b} on {a} "))?;
            write!(self.out, " ")?;
        }
        writeln!(
            self.out,
            "{a} vs {b}  {:.2}:1  AA {}  AAA {}",
            report.ratio,
            verdict(report.aa),
            verdict(report.aaa)
        )
    }

    pub fn report(&mut self, palette: &Palette, rows: &[PairReport]) -> io::Result<()> {
        self.palette(palette, &LockMask::NONE)?;
        self.heading("contrast")?;
        for row in rows {
            write!(self.out, "{}-{}  ", row.first + 1, row.second + 1)?;
            self.contrast(row.a, row.b, &row.contrast)?;
        }
        let passing = rows.iter().filter(|r| r.contrast.aa).count();
        writeln!(self.out, "{passing}/{} pairs pass AA", rows.len())
    }

    /// Numbered, named palette with its share code.
    pub fn preset(&mut self, index: usize, name: &str, palette: &Palette) -> io::Result<()> {
        self.heading(&format!("{}. {name}  {}", index + 1, to_share_code(palette)))?;
        self.palette(palette, &LockMask::NONE)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

const fn verdict(pass: bool) -> &'static str {
    if pass { "pass" } else { "fail" }
}
