// SPDX-License-Identifier: MIT
//
// Command-line definitions (clap derive).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pf_engine::{AdjustmentVector, ExportFormat, FormatError, Rgb};

/// Five-color palette generator with contrast checks and exports
#[derive(Debug, Parser)]
#[command(name = "pforge", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Start from this palette (share code, e.g. 7C3AED-0EA5E9-22C55E-F59E0B-EF4444)
    #[arg(long, global = true, value_name = "CODE")]
    pub from: Option<String>,

    /// Plain text output, no ANSI colors (also set by NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// More log output (-v info, -vv debug). Overrides PFORGE_LOG.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate new palettes
    Generate(GenerateArgs),
    /// Adjust one color by temperature / saturation / lightness
    Adjust {
        #[arg(value_parser = parse_color)]
        color: Rgb,
        #[command(flatten)]
        adjust: AdjustArgs,
    },
    /// Show details for one color: HSL, nearest name, text color, shades
    Inspect {
        #[arg(value_parser = parse_color)]
        color: Rgb,
    },
    /// Contrast ratio between two colors
    Contrast {
        #[arg(value_parser = parse_color)]
        a: Rgb,
        #[arg(value_parser = parse_color)]
        b: Rgb,
    },
    /// Contrast for every pair of slots in a palette
    Report {
        /// Share code (default: the starting palette)
        code: Option<String>,
    },
    /// Print a palette as CSS, Tailwind, JSON, SCSS or a share code
    Export {
        /// Share code (default: the starting palette)
        code: Option<String>,
        #[arg(short, long, default_value = "css")]
        format: PaletteFormat,
    },
    /// Pull the first five #RRGGBB colors out of a file (- for stdin)
    Import { file: PathBuf },
    /// List the curated palettes
    Trending,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Mood: calm, energetic, professional, playful, vintage
    #[arg(long, env = "PFORGE_MOOD")]
    pub mood: Option<String>,

    /// Harmony: complementary, analogous, triadic, tetradic, mono
    #[arg(long, env = "PFORGE_HARMONY")]
    pub harmony: Option<String>,

    /// Pin slot 1 to this color
    #[arg(long, env = "PFORGE_SEED", value_parser = parse_color)]
    pub seed: Option<Rgb>,

    /// Slots to keep from the starting palette, 1-based (e.g. 1,3)
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(1..=5))]
    pub lock: Vec<u8>,

    #[command(flatten)]
    pub adjust: AdjustArgs,

    /// Number of palettes to generate, each from the previous one
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed the random generator for repeatable output
    #[arg(long, value_name = "N")]
    pub rng_seed: Option<u32>,

    #[arg(short, long, default_value = "swatch")]
    pub format: PaletteFormat,
}

/// Slider values, each roughly -100..=100.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct AdjustArgs {
    /// Temperature (hue rotation, 0.6° per unit)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub temp: f64,

    /// Saturation delta (0.5 points per unit)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub sat: f64,

    /// Lightness delta (0.5 points per unit)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub light: f64,
}

impl AdjustArgs {
    pub const fn vector(self) -> AdjustmentVector {
        AdjustmentVector::new(self.temp, self.sat, self.light)
    }
}

/// How a palette is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaletteFormat {
    /// Colored swatches with names
    Swatch,
    /// One #RRGGBB per line
    Hex,
    /// Share code
    Code,
    Css,
    Tailwind,
    Json,
    Scss,
}

impl PaletteFormat {
    /// The export format this maps to, if it is one.
    pub const fn export_format(self) -> Option<ExportFormat> {
        match self {
            Self::Css => Some(ExportFormat::Css),
            Self::Tailwind => Some(ExportFormat::Tailwind),
            Self::Json => Some(ExportFormat::Json),
            Self::Scss => Some(ExportFormat::Scss),
            Self::Swatch | Self::Hex | Self::Code => None,
        }
    }
}

fn parse_color(s: &str) -> Result<Rgb, FormatError> {
    s.trim().parse()
}
