//! Nearest-name lookup against a small fixed color vocabulary.

use pf_color::Rgb;

/// Reference table, searched in order. Earlier entries win distance ties.
pub const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("Midnight Blue", Rgb::new(0x19, 0x19, 0x70)),
    ("Coral Sunset", Rgb::new(0xFF, 0x7F, 0x50)),
    ("Teal", Rgb::new(0x00, 0x80, 0x80)),
    ("Lavender", Rgb::new(0xB5, 0x7E, 0xDC)),
    ("Crimson", Rgb::new(0xDC, 0x14, 0x3C)),
    ("Goldenrod", Rgb::new(0xDA, 0xA5, 0x20)),
    ("Slate", Rgb::new(0x70, 0x80, 0x90)),
    ("Seafoam", Rgb::new(0x2D, 0xD4, 0xBF)),
    ("Indigo", Rgb::new(0x4B, 0x00, 0x82)),
    ("Emerald", Rgb::new(0x10, 0xB9, 0x81)),
    ("Sky", Rgb::new(0x38, 0xBD, 0xF8)),
    ("Amber", Rgb::new(0xF5, 0x9E, 0x0B)),
    ("Rose", Rgb::new(0xF4, 0x3F, 0x5E)),
    ("Cobalt", Rgb::new(0x25, 0x63, 0xEB)),
    ("Mint", Rgb::new(0x84, 0xCC, 0x16)),
    ("Plum", Rgb::new(0x7C, 0x3A, 0xED)),
];

/// Name of the table entry closest to `color` by squared RGB distance.
#[must_use]
pub fn nearest_named_color(color: Rgb) -> &'static str {
    let mut best = NAMED_COLORS[0];
    let mut best_dist = color.distance_sq(best.1);
    for &(name, reference) in &NAMED_COLORS[1..] {
        let dist = color.distance_sq(reference);
        // Strict: a later entry must be closer, not just as close.
        if dist < best_dist {
            best = (name, reference);
            best_dist = dist;
        }
    }
    best.0
}
