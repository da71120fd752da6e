//! Curated preset palettes — the "trending" shelf.

use pf_color::Rgb;

use crate::palette::Palette;

const fn rgb(hex: u32) -> Rgb {
    Rgb::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

const fn palette(hex: [u32; 5]) -> Palette {
    Palette::new([rgb(hex[0]), rgb(hex[1]), rgb(hex[2]), rgb(hex[3]), rgb(hex[4])])
}

/// Name and palette of every preset, in display order.
pub const TRENDING: &[(&str, Palette)] = &[
    ("dusk-lagoon", palette([0x1E293B, 0x0EA5E9, 0x22D3EE, 0xA78BFA, 0xF0ABFC])),
    ("citrus-grove", palette([0x0F172A, 0x14B8A6, 0x22C55E, 0xEAB308, 0xF97316])),
    ("deep-harbor", palette([0x0B132B, 0x1C2541, 0x3A506B, 0x5BC0BE, 0x6FFFE9])),
    ("royal-carnival", palette([0x2E1065, 0x7C3AED, 0xF59E0B, 0x22C55E, 0x06B6D4])),
    ("neon-night", palette([0x111827, 0xF472B6, 0xFB7185, 0xFACC15, 0x34D399])),
    ("spring-pop", palette([0x0F172A, 0x38BDF8, 0xA3E635, 0xFDE047, 0xFB7185])),
];

/// Look up a preset by name, or by 1-based position in [`TRENDING`].
///
/// Returns `None` if neither matches.
#[must_use]
pub fn trending(key: &str) -> Option<Palette> {
    let key = key.trim();
    if let Ok(n) = key.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| TRENDING.get(i)).map(|&(_, p)| p);
    }
    let lower = key.to_lowercase();
    TRENDING.iter().find(|(name, _)| *name == lower).map(|&(_, p)| p)
}

/// All preset names, display order.
pub fn trending_names() -> impl Iterator<Item = &'static str> {
    TRENDING.iter().map(|&(name, _)| name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
