//! Text renditions of a palette: stylesheet snippets, JSON, share codes,
//! and the reverse direction, pulling colors back out of arbitrary text.

use std::fmt::Write as _;
use std::sync::LazyLock;

use pf_color::Rgb;
use regex::Regex;

use crate::error::Error;
use crate::palette::{PALETTE_SIZE, Palette};

/// Separator between the groups of a share code.
pub const SHARE_SEPARATOR: char = '-';

// ---------------------------------------------------------------------------
// Stylesheet / config exports
// ---------------------------------------------------------------------------

/// Target syntax for [`export`]. Variable names are 1-based in every format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// `:root { --color-1: … }`
    Css,
    /// A `module.exports` theme extension with keys `c1`..`c5`.
    Tailwind,
    /// `{"colors": [...]}`, pretty-printed.
    Json,
    /// `$color-1: …;` lines.
    Scss,
}

impl ExportFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
            Self::Scss => "scss",
        }
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|f| f.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Css, Self::Tailwind, Self::Json, Self::Scss]
    }
}

/// Render `palette` in `format`. No trailing newline.
///
/// # Errors
///
/// Only the JSON format can fail, and only if serialization does.
pub fn export(palette: &Palette, format: ExportFormat) -> Result<String, Error> {
    let hex = palette.to_hex();
    let out = match format {
        ExportFormat::Css => {
            let mut s = String::from(":root {\n");
            for (i, c) in hex.iter().enumerate() {
                let _ = writeln!(s, "  --color-{}: {c};", i + 1);
            }
            s.push('}');
            s
        }
        ExportFormat::Tailwind => {
            let mut s = String::from("module.exports = { theme: { extend: { colors: {\n");
            for (i, c) in hex.iter().enumerate() {
                let _ = writeln!(s, "  c{}: '{c}',", i + 1);
            }
            s.push_str("} } } }");
            s
        }
        ExportFormat::Json => serde_json::to_string_pretty(&serde_json::json!({ "colors": hex }))?,
        ExportFormat::Scss => hex
            .iter()
            .enumerate()
            .map(|(i, c)| format!("$color-{}: {c};", i + 1))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(out)
}

// ---------------------------------------------------------------------------
// Share codes
// ---------------------------------------------------------------------------

/// `7C3AED-0EA5E9-22C55E-F59E0B-EF4444`: five bare uppercase groups.
#[must_use]
pub fn to_share_code(palette: &Palette) -> String {
    palette
        .iter()
        .map(pf_color::hex::format_hex_bare)
        .collect::<Vec<_>>()
        .join(&SHARE_SEPARATOR.to_string())
}

/// Decode a share code. Groups may carry a `#` and any letter case;
/// surrounding whitespace is ignored.
///
/// # Errors
///
/// [`Error::ShareCode`] unless there are exactly five groups, and
/// [`Error::Color`] for the first group that is not a hex color.
pub fn from_share_code(code: &str) -> Result<Palette, Error> {
    let groups: Vec<&str> = code.trim().split(SHARE_SEPARATOR).map(str::trim).collect();
    if groups.len() != PALETTE_SIZE {
        return Err(Error::ShareCode { found: groups.len() });
    }
    Palette::from_hex(&groups)
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

static HEX_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9A-Fa-f]{6})\b").expect("valid regex"));

/// Every `#RRGGBB` token in `text`, in order of appearance. Longer runs of
/// hex digits (`#RRGGBBAA`) are skipped.
#[must_use]
pub fn extract_colors(text: &str) -> Vec<Rgb> {
    HEX_TOKEN
        .captures_iter(text)
        .filter_map(|caps| Rgb::from_hex(&caps[1]).ok())
        .collect()
}

/// The first five colors found in `text`, e.g. a previous export.
///
/// # Errors
///
/// [`Error::PaletteSize`] when fewer than five colors are found.
pub fn palette_from_text(text: &str) -> Result<Palette, Error> {
    let colors = extract_colors(text);
    if colors.len() > PALETTE_SIZE {
        log::debug!("found {} colors, keeping the first {PALETTE_SIZE}", colors.len());
    }
    let slots: [Rgb; PALETTE_SIZE] = colors
        .get(..PALETTE_SIZE)
        .and_then(|s| s.try_into().ok())
        .ok_or(Error::PaletteSize { found: colors.len() })?;
    Ok(Palette::new(slots))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
