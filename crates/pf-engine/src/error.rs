//! Engine error type.

use pf_color::FormatError;
use thiserror::Error;

/// Everything the engine can reject. Generation itself never fails; errors
/// come from decoding caller-supplied text or addressing a slot that does
/// not exist.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid color: {0}")]
    Color(#[from] FormatError),

    #[error("share code must hold 5 colors, found {found}")]
    ShareCode { found: usize },

    #[error("palette needs 5 colors, found {found}")]
    PaletteSize { found: usize },

    #[error("slot {index} is out of range (palettes have 5 slots)")]
    Slot { index: usize },

    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
}
